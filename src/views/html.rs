//! Built-in HTML renderer

use std::fmt::Write;

use axum::http::StatusCode;

use crate::{
    models::{AppliedItem, Competition, CompetitionListItem, Competitor},
    utils::time::is_past_date,
};

use super::{Template, View, ViewItems, ViewResult};

/// Render a view to a complete HTML document
pub fn render(view: &View) -> String {
    let body = match view.template {
        Template::Index => index(&view.result),
        Template::Form => form(&view.result),
        Template::Applied => applied(&view.result),
        Template::Bodovi => bodovi(&view.result),
    };
    layout("Natjecanja", &body)
}

/// Render the shared error page
pub fn error_page(status: StatusCode, message: &str) -> String {
    let body = format!(
        "<h1>Greška</h1>\n<p class=\"error\" data-status=\"{}\">{}</p>\n<p><a href=\"/competitions\">Natrag</a></p>\n",
        status.as_u16(),
        escape(message)
    );
    layout("Greška", &body)
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"hr\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape(title),
        body
    )
}

fn index(result: &ViewResult) -> String {
    let items: &[CompetitionListItem] = match &result.items {
        Some(ViewItems::Competitions(items)) => items.as_slice(),
        _ => &[],
    };

    let mut out = String::from(
        "<h1>Natjecanja</h1>\n<p><a href=\"/competitions/add\">Dodaj natjecanje</a></p>\n<table>\n<tr><th>Naziv</th><th>Opis</th><th>Autor</th><th>Prijave do</th><th></th></tr>\n",
    );
    for item in items {
        let closed = if is_past_date(item.apply_till) {
            " <em>(zatvoreno)</em>"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "<tr><td>{name}</td><td>{description}</td><td>{author}</td><td>{till}{closed}</td><td>\
             <a href=\"/competitions/apply/{id}\">Prijavi se</a> \
             <a href=\"/competitions/applied/{id}\">Prijavljeni</a> \
             <a href=\"/competitions/edit/{id}\">Uredi</a> \
             <a href=\"/competitions/delete/{id}\">Obriši</a></td></tr>",
            id = item.id,
            name = escape(&item.name),
            description = escape(&item.description),
            author = escape(&item.author),
            till = item.apply_till,
        );
    }
    out.push_str("</table>\n");
    out
}

fn form(result: &ViewResult) -> String {
    let mut out = String::from("<h1>Natjecanje</h1>\n");
    flags(&mut out, result);

    if result.display_form {
        out.push_str(&competition_form(result.edit.as_ref()));
    }
    out.push_str("<p><a href=\"/competitions\">Natrag na popis</a></p>\n");
    out
}

fn competition_form(edit: Option<&Competition>) -> String {
    let (action, id_field, name, description, till) = match edit {
        Some(c) => (
            "/competitions/edit",
            format!("<input type=\"hidden\" name=\"id\" value=\"{}\">\n", c.id),
            escape(&c.name),
            escape(&c.description),
            c.apply_till.to_string(),
        ),
        None => (
            "/competitions/add",
            String::new(),
            String::new(),
            String::new(),
            String::new(),
        ),
    };

    format!(
        "<form method=\"post\" action=\"{action}\">\n{id_field}\
         <label>Naziv <input type=\"text\" name=\"name\" value=\"{name}\"></label>\n\
         <label>Opis <textarea name=\"description\">{description}</textarea></label>\n\
         <label>Prijave do <input type=\"date\" name=\"apply_till\" value=\"{till}\"></label>\n\
         <button type=\"submit\">Spremi</button>\n</form>\n"
    )
}

fn applied(result: &ViewResult) -> String {
    let items: &[AppliedItem] = match &result.items {
        Some(ViewItems::Applied(items)) => items.as_slice(),
        _ => &[],
    };

    let mut out = String::from(
        "<h1>Prijavljeni</h1>\n<table>\n<tr><th>Natjecanje</th><th>Korisnik</th><th>Bodovi</th><th></th></tr>\n",
    );
    for item in items {
        let _ = writeln!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td><a href=\"/competitions/bodovi/{}\">Bodovi</a></td></tr>",
            escape(&item.name),
            escape(&item.korisnik),
            score(item.bodovi),
            item.id,
        );
    }
    out.push_str("</table>\n<p><a href=\"/competitions\">Natrag na popis</a></p>\n");
    out
}

fn bodovi(result: &ViewResult) -> String {
    let mut out = String::from("<h1>Bodovi</h1>\n");
    flags(&mut out, result);

    if let (true, Some(competitor)) = (result.display_form, result.bodovi.as_ref()) {
        out.push_str(&score_form(competitor));
    }
    out
}

fn score_form(competitor: &Competitor) -> String {
    format!(
        "<form method=\"post\" action=\"/competitions/bodovi\">\n\
         <input type=\"hidden\" name=\"id\" value=\"{}\">\n\
         <label>Bodovi <input type=\"number\" name=\"bodovi\" min=\"1\" max=\"50\" step=\"any\" value=\"{}\"></label>\n\
         <button type=\"submit\">Spremi</button>\n</form>\n",
        competitor.id,
        score(competitor.bodovi),
    )
}

fn flags(out: &mut String, result: &ViewResult) {
    if result.success {
        out.push_str("<p class=\"success\">Uspješno spremljeno.</p>\n");
    }
    if result.validation_error {
        out.push_str("<p class=\"validation-error\">Neispravni podaci.</p>\n");
    }
    if result.database_error {
        out.push_str("<p class=\"database-error\">Greška pri spremanju u bazu.</p>\n");
    }
}

fn score(bodovi: Option<f64>) -> String {
    bodovi.map(|b| b.to_string()).unwrap_or_default()
}

/// Escape text for HTML element and attribute content
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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
