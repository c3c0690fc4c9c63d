//! Login page and dashboard
//!
//! Minimal embedded HTML, no template engine. The dashboard posts to
//! `/create` and shows the generated proxy link.

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;

use crate::http::error::{AppError, AppResult};
use crate::http::middleware::session_is_valid;
use crate::http::AppState;

/// GET / - dashboard when authenticated, login form otherwise
pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> Html<String> {
    if session_is_valid(&headers, &state) {
        Html(DASHBOARD_HTML.to_string())
    } else {
        Html(login_page(false))
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub password: String,
}

/// POST /login - set the session cookie and redirect to the dashboard
pub async fn login(
    State(state): State<AppState>,
    Form(request): Form<LoginRequest>,
) -> AppResult<Response> {
    if !state.verifier.verify(&request.password) {
        return Ok(Html(login_page(true)).into_response());
    }

    let max_age = state.auth.session_max_age_days * 86400;
    let cookie = format!(
        "{}={}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax",
        state.auth.cookie_name, request.password, max_age
    );

    let mut response = Redirect::to("/").into_response();
    response.headers_mut().insert(
        header::SET_COOKIE,
        HeaderValue::from_str(&cookie)
            .map_err(|e| AppError::internal(format!("Invalid cookie value: {e}")))?,
    );
    Ok(response)
}

fn login_page(failed: bool) -> String {
    let notice = if failed {
        r#"<p class="err">Wrong password</p>"#
    } else {
        ""
    };
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="UTF-8"><meta name="viewport" content="width=device-width,initial-scale=1">
<title>MediaLink - Login</title>
<style>{STYLE}</style></head>
<body><div class="card">
<h1>MediaLink</h1>
{notice}
<form action="/login" method="POST">
<input type="password" name="password" placeholder="Password" required/>
<button type="submit">Login</button>
</form>
</div></body></html>"#
    )
}

const STYLE: &str = "body{background:#111;color:#eee;font-family:sans-serif;display:flex;\
align-items:center;justify-content:center;min-height:100vh;margin:0}\
.card{background:#1c1c1c;border:1px solid #333;border-radius:12px;padding:2rem;\
width:100%;max-width:26rem}h1{margin-top:0;text-align:center}\
input{width:100%;box-sizing:border-box;background:#111;color:#eee;border:1px solid #444;\
border-radius:6px;padding:.5rem;margin-bottom:.75rem}\
button{width:100%;background:#eee;color:#111;font-weight:bold;border:0;border-radius:6px;\
padding:.5rem;cursor:pointer}.err{color:#f66}\
#result{display:none;margin-top:1rem}#final-link{color:#6f6;border-color:#264}";

const DASHBOARD_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head><meta charset="UTF-8"><meta name="viewport" content="width=device-width,initial-scale=1">
<title>MediaLink</title>
<style>body{background:#111;color:#eee;font-family:sans-serif;display:flex;align-items:center;justify-content:center;min-height:100vh;margin:0}.card{background:#1c1c1c;border:1px solid #333;border-radius:12px;padding:2rem;width:100%;max-width:32rem}h1{margin-top:0;text-align:center}input{width:100%;box-sizing:border-box;background:#111;color:#eee;border:1px solid #444;border-radius:6px;padding:.5rem;margin-bottom:.75rem}button{width:100%;background:#eee;color:#111;font-weight:bold;border:0;border-radius:6px;padding:.5rem;cursor:pointer}#result{display:none;margin-top:1rem}#final-link{color:#6f6;border-color:#264}</style>
</head>
<body><div class="card">
<h1>MediaLink</h1>
<input id="source-url" type="text" placeholder="Source URL (direct or hosting page)"/>
<input id="file-name" type="text" placeholder="Filename"/>
<button id="btn" onclick="saveLink()">Generate</button>
<div id="result">
<input id="final-link" readonly/>
<a id="test-btn" href="#" target="_blank">Test download</a>
</div>
</div>
<script>
async function saveLink(){
  const url=document.getElementById('source-url').value;
  const name=document.getElementById('file-name').value;
  const btn=document.getElementById('btn');
  if(!url||!name)return alert('Fill all fields');
  btn.disabled=true;btn.innerText='...';
  try{
    const res=await fetch('/create',{method:'POST',
      headers:{'Content-Type':'application/x-www-form-urlencoded'},
      body:new URLSearchParams({url,name})});
    const data=await res.json();
    if(data.success){
      document.getElementById('final-link').value=data.link;
      document.getElementById('test-btn').href=data.link;
      document.getElementById('result').style.display='block';
    }else alert(data.error);
  }catch(e){alert('Request failed');}
  btn.disabled=false;btn.innerText='Generate';
}
</script></body></html>"##;
