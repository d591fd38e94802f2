use addrbook::api::{CmdMessage, MessageLevel};
use addrbook::model::Contact;
use colored::Colorize;
use std::io::{self, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const NAME_WIDTH: usize = 24;
const PHONE_WIDTH: usize = 16;
const EMAIL_WIDTH: usize = 30;
const GAP: &str = "  ";

pub(super) fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// The menu's record block: one labelled line per field.
pub(super) fn write_contact_details<W: Write>(
    out: &mut W,
    contacts: &[Contact],
) -> io::Result<()> {
    for contact in contacts {
        writeln!(out)?;
        writeln!(out, "Name: {}", contact.name)?;
        writeln!(out, "Phone: {}", contact.phone)?;
        writeln!(out, "Email: {}", contact.email)?;
        writeln!(out, "Address: {}", contact.address)?;
    }
    Ok(())
}

/// One row per contact in fixed-width columns, for the one-shot commands.
pub(super) fn render_table(contacts: &[Contact]) -> String {
    let address_width =
        LINE_WIDTH.saturating_sub(NAME_WIDTH + PHONE_WIDTH + EMAIL_WIDTH + 3 * GAP.len());

    let mut output = String::new();
    let header = format!(
        "{}{GAP}{}{GAP}{}{GAP}{}",
        pad_to_width("NAME", NAME_WIDTH),
        pad_to_width("PHONE", PHONE_WIDTH),
        pad_to_width("EMAIL", EMAIL_WIDTH),
        "ADDRESS",
    );
    output.push_str(&header.bold().to_string());
    output.push('\n');

    for contact in contacts {
        let row = format!(
            "{}{GAP}{}{GAP}{}{GAP}{}",
            pad_to_width(&contact.name, NAME_WIDTH),
            pad_to_width(&contact.phone, PHONE_WIDTH),
            pad_to_width(&contact.email, EMAIL_WIDTH),
            truncate_to_width(&contact.address, address_width),
        );
        output.push_str(row.trim_end());
        output.push('\n');
    }
    output
}

fn pad_to_width(s: &str, width: usize) -> String {
    let shown = truncate_to_width(s, width);
    let padding = width.saturating_sub(shown.width());
    format!("{}{}", shown, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
