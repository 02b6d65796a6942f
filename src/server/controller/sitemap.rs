//! HTML index of the registered endpoints served at `/`.

use utoipa::openapi::OpenApi;

/// Renders every operation of the OpenAPI document as a list item
///
/// GET routes without path parameters are rendered as links.
pub fn render_sitemap(api: &OpenApi) -> String {
    let mut items = String::new();

    for (path, item) in api.paths.paths.iter() {
        let methods = [
            ("GET", item.get.is_some()),
            ("POST", item.post.is_some()),
            ("PUT", item.put.is_some()),
            ("DELETE", item.delete.is_some()),
        ];

        for (method, _) in methods.iter().filter(|(_, registered)| *registered) {
            if *method == "GET" && !path.contains('{') {
                items.push_str(&format!(
                    "<li>{} <a href=\"{}\">{}</a></li>\n",
                    method, path, path
                ));
            } else {
                items.push_str(&format!("<li>{} {}</li>\n", method, path));
            }
        }
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>Holocron API</title></head>\n<body>\n\
         <h1>Holocron API</h1>\n<ul>\n{}</ul>\n\
         <p><a href=\"/api/docs\">API documentation</a></p>\n</body>\n</html>\n",
        items
    )
}
