// src/presentation/http/cookies.rs
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";
pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";

fn session_cookie(name: &'static str, value: String) -> Cookie<'static> {
    let mut cookie = Cookie::new(name, value);
    cookie.set_http_only(true);
    cookie.set_secure(true);
    cookie.set_same_site(SameSite::Strict);
    cookie.set_path("/");
    cookie
}

/// Attach the freshly issued pair as `httpOnly` + `secure` cookies.
pub fn set_session_cookies(jar: CookieJar, access_token: &str, refresh_token: &str) -> CookieJar {
    jar.add(session_cookie(ACCESS_TOKEN_COOKIE, access_token.to_owned()))
        .add(session_cookie(REFRESH_TOKEN_COOKIE, refresh_token.to_owned()))
}

/// Expire both session cookies (logout).
pub fn clear_session_cookies(jar: CookieJar) -> CookieJar {
    let mut access = session_cookie(ACCESS_TOKEN_COOKIE, String::new());
    access.make_removal();
    let mut refresh = session_cookie(REFRESH_TOKEN_COOKIE, String::new());
    refresh.make_removal();
    jar.add(access).add(refresh)
}
