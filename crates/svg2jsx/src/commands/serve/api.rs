//! Routes requests to the conversion API.
use std::{fs, path::Path};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};
use svg2jsx_transform::{
    batch::svg_stem, convert, convert_batch, BatchError, BatchResult, Input, Options, SourceFile,
};
use tiny_http::{Method, Request};

use super::response::send_json;

/// The options used by the API when none are configured
pub const DEFAULT_OPTIONS: Options = Options {
    typescript: true,
    cleanup_ids: false,
    memo: false,
    jsx_single_quote: false,
};

const FOLDERS_REQUIRED: &str = "Input and output folders are required";

/// A response's status and json body
#[derive(Debug, PartialEq)]
pub struct Reply {
    /// The HTTP status code
    pub status: u16,
    /// The json body
    pub body: Value,
}

impl Reply {
    fn json<T: Serialize>(status: u16, body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(body) => Self { status, body },
            Err(err) => Self::error(500, &err.to_string()),
        }
    }

    fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: json!({ "error": message }),
        }
    }
}

#[derive(Deserialize, Default, Clone, Copy)]
#[serde(rename_all = "camelCase")]
/// Options given with a request, each falling back to the server's defaults
struct RequestOptions {
    typescript: Option<bool>,
    cleanup_ids: Option<bool>,
    memo: Option<bool>,
    #[serde(alias = "singleQuoteStrings")]
    jsx_single_quote: Option<bool>,
}

impl RequestOptions {
    fn resolve(options: Option<Self>, defaults: Options) -> Options {
        let options = options.unwrap_or_default();
        Options {
            typescript: options.typescript.unwrap_or(defaults.typescript),
            cleanup_ids: options.cleanup_ids.unwrap_or(defaults.cleanup_ids),
            memo: options.memo.unwrap_or(defaults.memo),
            jsx_single_quote: options.jsx_single_quote.unwrap_or(defaults.jsx_single_quote),
        }
    }
}

#[derive(Deserialize)]
struct ConvertRequest {
    svg: Option<String>,
    filename: Option<String>,
    options: Option<RequestOptions>,
}

#[derive(Deserialize)]
struct BatchRequest {
    #[serde(default)]
    files: Vec<SourceFile>,
    options: Option<RequestOptions>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FolderRequest {
    input_folder: Option<String>,
    output_folder: Option<String>,
    options: Option<RequestOptions>,
}

/// Reads the request's body, then routes and answers it.
///
/// # Errors
/// When the response can't be sent
pub fn handle_request(mut request: Request, defaults: Options) -> anyhow::Result<()> {
    let mut body = String::new();
    let reply = match request.as_reader().read_to_string(&mut body) {
        Ok(_) => route(request.method(), request.url(), &body, defaults),
        Err(err) => Reply::error(400, &format!("Invalid request body: {err}")),
    };
    eprintln!("{} {} {}", request.method(), request.url(), reply.status);
    send_json(request, reply.status, &reply.body)
}

/// Answers a request to the API
pub fn route(method: &Method, url: &str, body: &str, defaults: Options) -> Reply {
    let path = url.split('?').next().unwrap_or_default();
    let handler: fn(&Value, Options) -> Reply = match path.trim_end_matches('/') {
        "/api" => convert_one,
        "/api/batch" => convert_many,
        _ => return Reply::error(404, "Not found"),
    };
    if method != &Method::Post {
        return Reply::error(405, "Method not allowed");
    }

    let body = if body.trim().is_empty() { "{}" } else { body };
    match serde_json::from_str::<Value>(body) {
        Ok(value) => handler(&value, defaults),
        Err(err) => Reply::error(400, &format!("Invalid JSON: {err}")),
    }
}

/// Returns the request's `input`, when it's wrapped in one
fn wrapped_input(value: &Value) -> Option<&Value> {
    value.get("input").filter(|input| input.is_object())
}

fn parse<T: DeserializeOwned>(value: &Value) -> Result<T, Reply> {
    T::deserialize(value).map_err(|err| Reply::error(400, &format!("Invalid request: {err}")))
}

fn convert_one(value: &Value, defaults: Options) -> Reply {
    let request: ConvertRequest = match parse(wrapped_input(value).unwrap_or(value)) {
        Ok(request) => request,
        Err(reply) => return reply,
    };
    let Some(svg) = request.svg.filter(|svg| !svg.is_empty()) else {
        return Reply::error(400, &Input::Svg.to_string());
    };
    let Some(filename) = request.filename.filter(|filename| !filename.is_empty()) else {
        return Reply::error(400, &Input::Filename.to_string());
    };

    let options = RequestOptions::resolve(request.options, defaults);
    match convert(&svg, &filename, options) {
        Ok(jsx) => Reply::json(200, &json!({ "jsx": jsx })),
        Err(err) => {
            log::debug!("failed to convert {filename}: {err}");
            Reply::json(
                500,
                &json!({ "error": "Failed to process SVG", "details": err.to_string() }),
            )
        }
    }
}

fn convert_many(value: &Value, defaults: Options) -> Reply {
    if let Some(input) = wrapped_input(value) {
        return convert_folder_request(input, defaults);
    }
    let request: BatchRequest = match parse(value) {
        Ok(request) => request,
        Err(reply) => return reply,
    };
    let options = RequestOptions::resolve(request.options, defaults);
    Reply::json(200, &convert_batch(request.files, options))
}

fn convert_folder_request(input: &Value, defaults: Options) -> Reply {
    let request: FolderRequest = match parse(input) {
        Ok(request) => request,
        Err(reply) => return reply,
    };
    let folders = request
        .input_folder
        .filter(|folder| !folder.is_empty())
        .zip(request.output_folder.filter(|folder| !folder.is_empty()));
    let Some((input_folder, output_folder)) = folders else {
        return Reply::json(400, &failed_batch(FOLDERS_REQUIRED.to_string()));
    };

    let options = RequestOptions::resolve(request.options, defaults);
    match convert_folder(Path::new(&input_folder), Path::new(&output_folder), options) {
        Ok(result) => Reply::json(200, &result),
        Err(err) => {
            eprintln!("failed to convert {input_folder}: {err}");
            Reply::json(500, &failed_batch(err.to_string()))
        }
    }
}

fn failed_batch(error: String) -> BatchResult {
    BatchResult {
        errors: vec![BatchError {
            file: String::new(),
            error,
        }],
        ..BatchResult::default()
    }
}

/// Converts the svg files directly within `input`, writing each component into `output`.
///
/// The returned result lists no files, since their content is written to disk.
fn convert_folder(input: &Path, output: &Path, options: Options) -> std::io::Result<BatchResult> {
    fs::create_dir_all(output)?;

    let mut files = vec![];
    let mut unreadable = vec![];
    for entry in fs::read_dir(input)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if svg_stem(&name).is_none() {
            continue;
        }
        match fs::read_to_string(entry.path()) {
            Ok(content) => files.push(SourceFile { name, content }),
            Err(err) => unreadable.push(BatchError {
                file: name,
                error: err.to_string(),
            }),
        }
    }

    let mut result = convert_batch(files, options);
    result.errors.append(&mut unreadable);
    for file in std::mem::take(&mut result.files) {
        if let Err(err) = fs::write(output.join(&file.name), &file.content) {
            result.processed_count -= 1;
            result.errors.push(BatchError {
                file: file.name,
                error: err.to_string(),
            });
        }
    }
    result.errors.sort_by(|a, b| a.file.cmp(&b.file));
    Ok(result)
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use svg2jsx_transform::Options;
    use tiny_http::Method;

    use super::{route, Reply, DEFAULT_OPTIONS};

    const ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg"><path d="M0 0"/></svg>"#;

    fn post(url: &str, body: &serde_json::Value) -> Reply {
        route(&Method::Post, url, &body.to_string(), DEFAULT_OPTIONS)
    }

    fn error(status: u16, message: &str) -> Reply {
        Reply {
            status,
            body: json!({ "error": message }),
        }
    }

    #[test]
    fn convert_typescript_by_default() {
        let reply = post("/api", &json!({ "svg": ICON, "filename": "my-icon.svg" }));
        assert_eq!(reply.status, 200);
        let jsx = reply.body["jsx"].as_str().unwrap_or_default();
        assert!(
            jsx.starts_with("const MyIcon = ({ className = '' }: { className?: string }) => (")
        );
        assert!(jsx.ends_with("export default MyIcon"));
    }

    #[test]
    fn convert_wrapped_input() {
        let reply = post(
            "/api",
            &json!({ "input": {
                "svg": ICON,
                "filename": "my-icon.svg",
                "options": { "typescript": false }
            } }),
        );
        assert_eq!(reply.status, 200);
        let jsx = reply.body["jsx"].as_str().unwrap_or_default();
        assert!(jsx.starts_with("const MyIcon = ({ className = '' }) => ("));
    }

    #[test]
    fn convert_missing_input() {
        assert_eq!(
            post("/api", &json!({ "filename": "a.svg" })),
            error(400, "SVG content is required")
        );
        assert_eq!(
            post("/api", &json!({ "svg": "", "filename": "a.svg" })),
            error(400, "SVG content is required")
        );
        assert_eq!(
            post("/api", &json!({ "svg": ICON })),
            error(400, "Filename is required")
        );
        assert_eq!(
            route(&Method::Post, "/api", "", DEFAULT_OPTIONS),
            error(400, "SVG content is required")
        );
    }

    #[test]
    fn convert_failure() {
        let reply = post("/api", &json!({ "svg": "<svg", "filename": "a.svg" }));
        assert_eq!(reply.status, 500);
        assert_eq!(reply.body["error"], "Failed to process SVG");
        assert!(reply.body["details"]
            .as_str()
            .unwrap_or_default()
            .starts_with("Failed to convert SVG to React component"));
    }

    #[test]
    fn routing() {
        assert_eq!(
            route(&Method::Get, "/api", "", DEFAULT_OPTIONS),
            error(405, "Method not allowed")
        );
        assert_eq!(
            route(&Method::Put, "/api/batch", "", DEFAULT_OPTIONS),
            error(405, "Method not allowed")
        );
        assert_eq!(
            route(&Method::Post, "/elsewhere", "", DEFAULT_OPTIONS),
            error(404, "Not found")
        );
        assert_eq!(
            route(&Method::Post, "/api?debug=1", "{", DEFAULT_OPTIONS).status,
            400
        );
    }

    #[test]
    fn batch_files() {
        let reply = route(
            &Method::Post,
            "/api/batch",
            &json!({
                "files": [
                    { "name": "b.svg", "content": ICON },
                    { "name": "a.txt", "content": "hello" }
                ],
                "options": { "typescript": false }
            })
            .to_string(),
            Options::default(),
        );
        assert_eq!(reply.status, 200);
        assert_eq!(reply.body["processedCount"], 1);
        assert_eq!(
            reply.body["errors"],
            json!([{ "file": "a.txt", "error": "Not an SVG file" }])
        );
        assert_eq!(reply.body["files"][0]["name"], "b.jsx");
    }

    #[test]
    fn batch_folders_required() {
        let reply = post("/api/batch", &json!({ "input": { "inputFolder": "icons" } }));
        assert_eq!(
            reply,
            Reply {
                status: 400,
                body: json!({
                    "processedCount": 0,
                    "errors": [{ "file": "", "error": "Input and output folders are required" }],
                    "files": []
                })
            }
        );
    }

    #[test]
    fn batch_folder() -> anyhow::Result<()> {
        let root = std::env::temp_dir().join(format!("svg2jsx-api-{}", std::process::id()));
        let input = root.join("icons");
        let output = root.join("components/generated");
        std::fs::create_dir_all(&input)?;
        std::fs::write(input.join("arrow-left.svg"), ICON)?;
        std::fs::write(input.join("LOGO.SVG"), ICON)?;
        std::fs::write(input.join("broken.svg"), "<svg")?;
        std::fs::write(input.join("readme.md"), "# icons")?;

        let reply = post(
            "/api/batch",
            &json!({ "input": {
                "inputFolder": input.to_string_lossy(),
                "outputFolder": output.to_string_lossy()
            } }),
        );
        assert_eq!(reply.status, 200);
        assert_eq!(reply.body["processedCount"], 2);
        assert_eq!(reply.body["files"], json!([]));
        assert_eq!(reply.body["errors"][0]["file"], "broken.svg");

        let arrow = std::fs::read_to_string(output.join("arrow-left.tsx"))?;
        assert!(arrow.starts_with("const ArrowLeft = "));
        assert!(output.join("LOGO.tsx").exists());
        assert!(!output.join("readme.tsx").exists());

        std::fs::remove_dir_all(root)?;
        Ok(())
    }

    #[test]
    fn batch_folder_missing() {
        let reply = post(
            "/api/batch",
            &json!({ "input": {
                "inputFolder": "/nonexistent/svg2jsx/icons",
                "outputFolder": std::env::temp_dir().join("svg2jsx-api-missing").to_string_lossy()
            } }),
        );
        assert_eq!(reply.status, 500);
        assert_eq!(reply.body["processedCount"], 0);
        assert_eq!(reply.body["errors"][0]["file"], "");
        let _ = std::fs::remove_dir_all(std::env::temp_dir().join("svg2jsx-api-missing"));
    }
}
