//! LLSD+XML serialization.

use std::fmt::Write;

use super::Value;

/// Serialize a value as a complete `<llsd>` document.
pub fn to_xml(value: &Value) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?><llsd>");
    write_value(&mut out, value);
    out.push_str("</llsd>");
    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Undef => out.push_str("<undef />"),
        Value::Boolean(b) => {
            out.push_str("<boolean>");
            out.push_str(if *b { "1" } else { "0" });
            out.push_str("</boolean>");
        }
        Value::Integer(i) => {
            let _ = write!(out, "<integer>{}</integer>", i);
        }
        Value::Real(r) => {
            if r.is_finite() {
                let _ = write!(out, "<real>{}</real>", r);
            } else if r.is_nan() {
                out.push_str("<real>nan</real>");
            } else if *r > 0.0 {
                out.push_str("<real>inf</real>");
            } else {
                out.push_str("<real>-inf</real>");
            }
        }
        Value::String(s) => write_text(out, "string", s),
        Value::Uuid(id) => {
            let _ = write!(out, "<uuid>{}</uuid>", id);
        }
        Value::Uri(u) => write_text(out, "uri", u),
        Value::Array(items) => {
            out.push_str("<array>");
            for item in items {
                write_value(out, item);
            }
            out.push_str("</array>");
        }
        Value::Map(map) => {
            out.push_str("<map>");
            for (key, item) in map {
                write_text(out, "key", key);
                write_value(out, item);
            }
            out.push_str("</map>");
        }
    }
}

fn write_text(out: &mut String, tag: &str, text: &str) {
    if text.is_empty() {
        let _ = write!(out, "<{} />", tag);
        return;
    }
    let _ = write!(out, "<{}>", tag);
    escape_into(out, text);
    let _ = write!(out, "</{}>", tag);
}

fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
}
