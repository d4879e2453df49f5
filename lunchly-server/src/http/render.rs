//! Server-rendered HTML pages
//!
//! Pages are plain strings wrapped in a shared layout. Anything that came
//! from the database or a request goes through [`escape`].

use std::fmt::Write as _;

use axum::response::Html;

use crate::models::{Customer, Reservation};

/// Escape text for use in element content and quoted attributes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title} | Lunchly</title>
</head>
<body>
  <nav>
    <a href="/">Lunchly</a>
    <a href="/top-ten">Top Customers</a>
    <a href="/add">Add Customer</a>
    <form action="/" method="get">
      <input name="search" placeholder="Search customers">
      <button>Search</button>
    </form>
  </nav>
  <main>
    <h1>{title}</h1>
{body}
  </main>
</body>
</html>
"#,
        title = escape(title),
        body = body,
    ))
}

fn customer_items(customers: &[Customer]) -> String {
    if customers.is_empty() {
        return "    <p>No customers found.</p>\n".to_owned();
    }

    let mut out = String::from("    <ul>\n");
    for c in customers {
        let id = c.id.unwrap_or_default();
        let _ = writeln!(
            out,
            r#"      <li><a href="/{id}">{name}</a></li>"#,
            name = escape(&c.full_name()),
        );
    }
    out.push_str("    </ul>\n");
    out
}

/// Customer list, optionally filtered by `search`.
pub fn customer_list(customers: &[Customer], search: Option<&str>) -> Html<String> {
    let title = match search {
        Some(term) if !term.trim().is_empty() => format!("Customers matching \"{}\"", term),
        _ => "Customers".to_owned(),
    };
    layout(&title, &customer_items(customers))
}

/// Busiest customers by reservation count.
pub fn top_customers(customers: &[Customer]) -> Html<String> {
    layout("Top Customers", &customer_items(customers))
}

/// Customer detail with reservations and the add-reservation form.
pub fn customer_detail(customer: &Customer, reservations: &[Reservation]) -> Html<String> {
    let id = customer.id.unwrap_or_default();
    let mut body = String::new();

    let _ = writeln!(body, "    <p>Phone: {}</p>", escape(customer.phone.as_deref().unwrap_or("")));
    let _ = writeln!(body, "    <p>Notes: {}</p>", escape(customer.notes.as_deref().unwrap_or("")));
    let _ = writeln!(body, r#"    <p><a href="/{id}/edit">Edit</a></p>"#);

    body.push_str("    <h2>Reservations</h2>\n");
    if reservations.is_empty() {
        body.push_str("    <p>No reservations yet.</p>\n");
    } else {
        body.push_str("    <ul>\n");
        for r in reservations {
            let _ = writeln!(
                body,
                "      <li><b>{when}</b> for {guests} guests{notes}</li>",
                when = escape(&r.formatted_start_at()),
                guests = r.num_guests,
                notes = r
                    .notes
                    .as_deref()
                    .map(|n| format!(": {}", escape(n)))
                    .unwrap_or_default(),
            );
        }
        body.push_str("    </ul>\n");
    }

    let _ = write!(
        body,
        r#"    <h2>New Reservation</h2>
    <form action="/{id}/add-reservation" method="post">
      <label>Start <input type="datetime-local" name="startAt" required></label>
      <label>Guests <input type="number" name="numGuests" min="1" required></label>
      <label>Notes <textarea name="notes"></textarea></label>
      <button>Add</button>
    </form>
"#
    );

    layout(&customer.full_name(), &body)
}

/// Add form when `customer` is unsaved, edit form otherwise.
pub fn customer_form(customer: Option<&Customer>) -> Html<String> {
    let (title, action) = match customer.and_then(|c| c.id) {
        Some(id) => ("Edit Customer", format!("/{id}/edit")),
        None => ("Add a Customer", "/add".to_owned()),
    };
    let field = |value: Option<&str>| escape(value.unwrap_or(""));

    let body = format!(
        r#"    <form action="{action}" method="post">
      <label>First Name <input name="firstName" value="{first}" required></label>
      <label>Last Name <input name="lastName" value="{last}" required></label>
      <label>Phone <input name="phone" value="{phone}"></label>
      <label>Notes <textarea name="notes">{notes}</textarea></label>
      <button>Save</button>
    </form>
"#,
        first = field(customer.map(|c| c.first_name.as_str())),
        last = field(customer.map(|c| c.last_name.as_str())),
        phone = field(customer.and_then(|c| c.phone.as_deref())),
        notes = field(customer.and_then(|c| c.notes.as_deref())),
    );

    layout(title, &body)
}

/// Error page shown for 4xx/5xx responses.
pub fn error_page(title: &str, message: &str) -> Html<String> {
    layout(title, &format!("    <p>{}</p>\n", escape(message)))
}
