//! Static HTML pages.

use axum::response::{Html, IntoResponse, Response};

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>httpbin: HTTP request introspection</title>
</head>
<body>
  <h1>httpbin</h1>
  <p>Echoes facts about the request you sent, as JSON.</p>
  <h2>Endpoints</h2>
  <ul>
    <li><a href="/">/</a> This page.</li>
    <li><a href="/get">/get</a> Query arguments, headers, origin and URL.</li>
    <li><a href="/ip">/ip</a> Client address as seen by the server.</li>
    <li><a href="/user-agent">/user-agent</a> The User-Agent header.</li>
    <li><a href="/headers">/headers</a> All request headers.</li>
    <li><a href="/forms/post">/forms/post</a> HTML form that posts to /post.</li>
  </ul>
  <p>Every response carries CORS headers; OPTIONS requests are answered as preflights.</p>
</body>
</html>
"#;

const FORMS_POST_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>httpbin: form</title>
</head>
<body>
  <form method="post" action="/post">
    <p><label>Customer name: <input name="custname"></label></p>
    <p><label>Telephone: <input type=tel name="custtel"></label></p>
    <p><label>E-mail address: <input type=email name="custemail"></label></p>
    <p><label>Comments: <textarea name="comments"></textarea></label></p>
    <p><button>Submit order</button></p>
  </form>
</body>
</html>
"#;

pub fn index() -> Response {
    Html(INDEX_HTML).into_response()
}

pub fn forms_post() -> Response {
    Html(FORMS_POST_HTML).into_response()
}
