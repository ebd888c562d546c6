use anyhow::anyhow;
use tiny_http::Server;

use crate::{
    args::RunCommand,
    config::{Config, DEFAULT_ADDRESS, DEFAULT_THREADS},
};

mod api;
mod response;

#[derive(clap::Args, Debug)]
/// Serves the conversion API over HTTP.
///
/// `POST /api` converts a single document and `POST /api/batch` converts many, either
/// from the request or from a folder on the server.
pub struct Serve {
    /// The socket address to listen on. Defaults to `127.0.0.1:3000`
    #[clap(long, short)]
    pub address: Option<String>,
    /// The number of threads handling requests. Defaults to 4
    #[clap(long, short)]
    pub threads: Option<usize>,
}

impl RunCommand for Serve {
    fn run(self, config: Config) -> anyhow::Result<()> {
        let serve = config.serve.unwrap_or_default();
        let address = self
            .address
            .or(serve.address)
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string());
        let threads = self.threads.or(serve.threads).unwrap_or(DEFAULT_THREADS);
        let defaults = config.options.unwrap_or(api::DEFAULT_OPTIONS);

        let server = Server::http(address.as_str())
            .map_err(|err| anyhow!("failed to listen on {address}: {err}"))?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()?;
        eprintln!("Serving on http://{address}");

        for request in server.incoming_requests() {
            pool.spawn(move || {
                if let Err(err) = api::handle_request(request, defaults) {
                    eprintln!("request error: {err}");
                }
            });
        }
        Ok(())
    }
}
