//! Response builders shared by the view handlers.

use lambda_http::http::StatusCode;
use lambda_http::{Body, Error, Response};

/// Escape text for interpolation into HTML.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap page content in the shared document shell.
pub fn html_page(title: &str, content: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        content
    )
}

pub fn html_response(markup: String) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(markup.into())
        .map_err(Box::new)?)
}

pub fn json_response(
    status: StatusCode,
    body: &serde_json::Value,
) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(body.to_string().into())
        .map_err(Box::new)?)
}

pub fn error_response(status: StatusCode, message: &str) -> Result<Response<Body>, Error> {
    json_response(status, &serde_json::json!({ "error": message }))
}

pub fn redirect(location: &str) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(StatusCode::FOUND)
        .header("Location", location)
        .body(Body::Empty)
        .map_err(Box::new)?)
}

#[cfg(test)]
mod tests {
    use super::{escape, html_page, redirect};
    use lambda_http::http::StatusCode;

    #[test]
    fn escapes_markup_in_names() {
        assert_eq!(
            escape("<script>\"x\" & 'y'</script>"),
            "&lt;script&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/script&gt;"
        );
        assert_eq!(escape("plain name"), "plain name");
    }

    #[test]
    fn page_shell_escapes_title_only() {
        let page = html_page("A & B", "<h1>ok</h1>");
        assert!(page.contains("<title>A &amp; B</title>"));
        assert!(page.contains("<h1>ok</h1>"));
    }

    #[test]
    fn redirect_is_302_with_location() {
        let resp = redirect("/best").unwrap();
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get("Location").unwrap(), "/best");
    }
}
