//! Minimal server-rendered HTML pages.
//!
//! No template engine; pages are assembled from small functions. Everything
//! user-controlled goes through [`escape`].

use axum::http::StatusCode;
use axum::response::Html;
use basket_core::cart;
use basket_db::models::item::Item;
use basket_db::models::link::CartEntry;
use basket_db::models::user::User;

use crate::flash::Flash;

/// Escape text for safe interpolation into HTML.
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

fn nav(user: Option<&User>) -> String {
    match user {
        Some(user) => format!(
            r#"<nav><a href="/">Home</a> <a href="/cart">Cart</a> <span>Hi {}</span> <a href="/logout">Logout</a></nav>"#,
            escape(&user.name)
        ),
        None => {
            r#"<nav><a href="/">Home</a> <a href="/login">Login</a> <a href="/register">Register</a></nav>"#
                .to_string()
        }
    }
}

fn flash_banner(flash: Option<Flash>) -> String {
    match flash {
        Some(flash) => format!(r#"<p class="flash">{}</p>"#, flash.message()),
        None => String::new(),
    }
}

fn form_errors(errors: &[String]) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let items: String = errors
        .iter()
        .map(|e| format!("<li>{}</li>", escape(e)))
        .collect();
    format!(r#"<ul class="errors">{items}</ul>"#)
}

fn layout(title: &str, user: Option<&User>, flash: Option<Flash>, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>{title} - Basket</title></head>
<body>
{nav}
{flash}
{body}
</body>
</html>"#,
        title = escape(title),
        nav = nav(user),
        flash = flash_banner(flash),
    ))
}

/// `GET /` -- the catalog.
pub fn catalog_page(items: &[Item], user: Option<&User>, flash: Option<Flash>) -> Html<String> {
    let rows: String = items
        .iter()
        .map(|item| {
            let img = item
                .img_url
                .as_deref()
                .map(|url| format!(r#"<img src="{}" alt="">"#, escape(url)))
                .unwrap_or_default();
            format!(
                r#"<li>{img}<h2>{title}</h2><p>{description}</p><p>Price: {price}</p><a href="/add/{id}">Add to cart</a></li>"#,
                title = escape(&item.title),
                description = escape(&item.description),
                price = item.price,
                id = item.id,
            )
        })
        .collect();
    let body = format!("<h1>Catalog</h1><ul>{rows}</ul>");
    layout("Catalog", user, flash, &body)
}

/// `GET /cart` -- the user's cart lines and total.
pub fn cart_page(entries: &[CartEntry], user: &User) -> Html<String> {
    let rows: String = entries
        .iter()
        .map(|entry| {
            format!(
                r#"<li><h2>{title}</h2><p>Amount: {amount}</p><p>Subtotal: {subtotal}</p><a href="/increase/{link_id}">+</a> <a href="/decrease/{link_id}">-</a></li>"#,
                title = escape(&entry.title),
                amount = entry.amount,
                subtotal = cart::line_subtotal(entry.amount, entry.price),
                link_id = entry.link_id,
            )
        })
        .collect();
    let total = cart::cart_total(entries.iter().map(|e| (e.amount, e.price)));
    let body = format!("<h1>Your cart</h1><ul>{rows}</ul><p>Total: {total}</p>");
    layout("Cart", Some(user), None, &body)
}

/// `GET /register` -- the registration form, re-rendered with inline errors
/// after a failed submission.
pub fn register_page(
    errors: &[String],
    user: Option<&User>,
    flash: Option<Flash>,
) -> Html<String> {
    let body = format!(
        r#"<h1>Register</h1>
{errors}
<form method="post" action="/register">
<label>Email <input type="email" name="email"></label>
<label>Name <input type="text" name="name"></label>
<label>Password <input type="password" name="password"></label>
<button type="submit">Register</button>
</form>"#,
        errors = form_errors(errors),
    );
    layout("Register", user, flash, &body)
}

/// `GET /login` -- the login form.
pub fn login_page(errors: &[String], user: Option<&User>, flash: Option<Flash>) -> Html<String> {
    let body = format!(
        r#"<h1>Login</h1>
{errors}
<form method="post" action="/login">
<label>Email <input type="email" name="email"></label>
<label>Password <input type="password" name="password"></label>
<button type="submit">Login</button>
</form>"#,
        errors = form_errors(errors),
    );
    layout("Login", user, flash, &body)
}

/// Rendered error page used by [`crate::error::AppError`].
pub fn error_page(status: StatusCode, message: &str) -> Html<String> {
    let body = format!(
        "<h1>{status}</h1><p>{message}</p>",
        status = status,
        message = escape(message),
    );
    layout("Error", None, None, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(
            escape(r#"<script>"a"&'b'</script>"#),
            "&lt;script&gt;&quot;a&quot;&amp;&#39;b&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn catalog_page_escapes_item_fields() {
        let item = Item {
            id: 1,
            title: "<b>Cup</b>".to_string(),
            description: "plain".to_string(),
            price: 10,
            img_url: None,
            created_at: chrono::Utc::now(),
        };
        let Html(page) = catalog_page(&[item], None, None);
        assert!(page.contains("&lt;b&gt;Cup&lt;/b&gt;"));
        assert!(!page.contains("<b>Cup</b>"));
        assert!(page.contains(r#"href="/add/1""#));
    }

    #[test]
    fn cart_page_shows_total() {
        let user = User {
            id: 1,
            email: "a@x.com".to_string(),
            password_hash: String::new(),
            name: "Ada".to_string(),
            created_at: chrono::Utc::now(),
        };
        let entries = vec![CartEntry {
            link_id: 7,
            item_id: 1,
            title: "Cup".to_string(),
            description: "plain".to_string(),
            price: 10,
            img_url: None,
            amount: 2,
        }];
        let Html(page) = cart_page(&entries, &user);
        assert!(page.contains("Total: 20"));
        assert!(page.contains(r#"href="/increase/7""#));
        assert!(page.contains(r#"href="/decrease/7""#));
    }
}
