//! HTML pages: a message, an optional search form and an optional result table.

use pnsearch_core::schema::{
    PARAM_ASC, PARAM_OR, PARAM_SELECT, PARAM_SORT, PRESENCE_FIELDS, SEARCH_FIELDS,
};
use pnsearch_core::{Combinator, DisplayTable, Label, Query, SortDirection};
use std::fmt::{self, Write};

/// What the search form needs to redraw itself.
pub struct Form<'a> {
    pub query: &'a Query,
    pub sort_choices: &'a [String],
    pub labels: &'a [Label],
}

#[derive(Default)]
pub struct Page<'a> {
    message: String,
    form: Option<Form<'a>>,
    table: Option<&'a DisplayTable>,
}

impl<'a> Page<'a> {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn form(mut self, form: Option<Form<'a>>) -> Self {
        self.form = form;
        self
    }

    pub fn table(mut self, table: &'a DisplayTable) -> Self {
        self.table = Some(table);
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::with_capacity(4096);
        match self.write(&mut out) {
            Ok(()) => out,
            Err(_) => String::new(),
        }
    }

    fn write(&self, out: &mut String) -> fmt::Result {
        out.push_str("<!DOCTYPE html>\n<html lang=\"ja\">\n");
        out.push_str("<head><meta charset=\"utf-8\"><title>pnsearch</title></head>\n<body>\n");
        if let Some(form) = &self.form {
            write_form(out, form)?;
        }
        writeln!(out, "<p class=\"msg\">{}</p>", escape(&self.message))?;
        if let Some(table) = self.table {
            write_table(out, table)?;
        }
        out.push_str("</body>\n</html>\n");
        Ok(())
    }
}

fn write_form(out: &mut String, form: &Form<'_>) -> fmt::Result {
    let q = form.query;
    out.push_str("<form action=\"/search/ui\" method=\"get\">\n");

    for field in SEARCH_FIELDS {
        writeln!(
            out,
            "<label>{p}<input type=\"text\" name=\"{p}\" value=\"{v}\"></label>",
            p = escape(field.param),
            v = escape((field.term)(&q.terms)),
        )?;
    }

    writeln!(out, "<select name=\"{PARAM_SORT}\">")?;
    for choice in form.sort_choices {
        writeln!(
            out,
            "<option value=\"{c}\"{s}>{c}</option>",
            c = escape(choice),
            s = selected(*choice == q.sort_column),
        )?;
    }
    out.push_str("</select>\n");
    write_checkbox(out, PARAM_ASC, "true", "昇順", q.direction == SortDirection::Ascending)?;
    write_checkbox(out, PARAM_OR, "true", "OR検索", q.combinator == Combinator::Or)?;

    for field in PRESENCE_FIELDS {
        let current = field.value_of((field.state)(q));
        writeln!(out, "<select name=\"{}\">", escape(field.param))?;
        for (value, label) in field.values.iter().zip(field.labels) {
            writeln!(
                out,
                "<option value=\"{}\"{}>{}</option>",
                escape(value),
                selected(*value == current),
                escape(label),
            )?;
        }
        out.push_str("</select>\n");
    }

    out.push_str("<fieldset>\n");
    for label in form.labels {
        let checked = q.select.iter().any(|s| *s == label.display);
        write_checkbox(out, PARAM_SELECT, &label.display, &label.display, checked)?;
    }
    out.push_str("</fieldset>\n<button type=\"submit\">検索</button>\n</form>\n");
    Ok(())
}

fn write_checkbox(
    out: &mut String,
    name: &str,
    value: &str,
    text: &str,
    checked: bool,
) -> fmt::Result {
    writeln!(
        out,
        "<label><input type=\"checkbox\" name=\"{}\" value=\"{}\"{}>{}</label>",
        escape(name),
        escape(value),
        if checked { " checked" } else { "" },
        escape(text),
    )
}

fn write_table(out: &mut String, table: &DisplayTable) -> fmt::Result {
    out.push_str("<table>\n<thead><tr>");
    for header in &table.header {
        write!(out, "<th>{}</th>", escape(header))?;
    }
    out.push_str("</tr></thead>\n<tbody>\n");
    for row in &table.rows {
        out.push_str("<tr>");
        for cell in row {
            write!(out, "<td>{}</td>", escape(cell))?;
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n");
    Ok(())
}

fn selected(yes: bool) -> &'static str {
    if yes {
        " selected"
    } else {
        ""
    }
}

/// Escape text for element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
