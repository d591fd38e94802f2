//! The numbered menu loop.
//!
//! Input validation for Add and Edit happens here: the shell keeps asking until
//! a phone or email passes, so the book only ever sees well-formed values. End
//! of input at any prompt is treated like choosing Exit.

use super::print::{write_contact_details, write_messages};
use addrbook::api::{AddrBookApi, CmdMessage};
use addrbook::error::{AddrBookError, Result};
use addrbook::model::{Contact, ContactUpdate};
use addrbook::store::ContactStore;
use addrbook::validate::{is_valid_email, is_valid_phone};
use std::io::{BufRead, Write};

const MENU: &str = "\
--- Address Book ---
1. Add Contact
2. Delete Contact
3. Edit Contact
4. Search Contact
5. Display All Contacts
6. Sort Contacts by Name
7. Save to File
8. Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Add,
    Delete,
    Edit,
    Search,
    Display,
    Sort,
    Save,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u32>().ok()? {
            1 => Some(Self::Add),
            2 => Some(Self::Delete),
            3 => Some(Self::Edit),
            4 => Some(Self::Search),
            5 => Some(Self::Display),
            6 => Some(Self::Sort),
            7 => Some(Self::Save),
            8 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Whether the loop keeps going. End of input also stops it.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Runs the menu until Exit or end of input, then saves and clears.
pub fn run<S, R, W>(api: &mut AddrBookApi<S>, input: R, output: W) -> Result<()>
where
    S: ContactStore,
    R: BufRead,
    W: Write,
{
    let mut shell = Shell { api, input, output };
    shell.run()
}

struct Shell<'a, S: ContactStore, R, W> {
    api: &'a mut AddrBookApi<S>,
    input: R,
    output: W,
}

impl<S: ContactStore, R: BufRead, W: Write> Shell<'_, S, R, W> {
    fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "\n{}", MENU)?;
            let Some(line) = self.ask("Enter your choice: ")? else {
                return self.exit();
            };

            let flow = match MenuChoice::parse(&line) {
                Some(choice) => self.dispatch(choice)?,
                None => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                return self.exit();
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::Add => self.add(),
            MenuChoice::Delete => self.delete(),
            MenuChoice::Edit => self.edit(),
            MenuChoice::Search => self.search(),
            MenuChoice::Display => self.display(),
            MenuChoice::Sort => {
                let result = self.api.sort()?;
                write_messages(&mut self.output, &result.messages)?;
                Ok(Flow::Continue)
            }
            MenuChoice::Save => {
                match self.api.save() {
                    Ok(result) => write_messages(&mut self.output, &result.messages)?,
                    Err(e) => self.report_error("Error saving contacts", &e)?,
                }
                Ok(Flow::Continue)
            }
            MenuChoice::Exit => Ok(Flow::Exit),
        }
    }

    fn add(&mut self) -> Result<Flow> {
        let Some(name) = self.ask("Enter name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(phone) = self.ask_until(
            "Enter phone number: ",
            is_valid_phone,
            "Invalid phone number. Please enter a valid format (e.g., 123-456-7890 or 1234567890).",
        )?
        else {
            return Ok(Flow::Exit);
        };
        let Some(email) = self.ask_until(
            "Enter email: ",
            is_valid_email,
            "Invalid email format. Please enter a valid email.",
        )?
        else {
            return Ok(Flow::Exit);
        };
        let Some(address) = self.ask("Enter address: ")? else {
            return Ok(Flow::Exit);
        };

        match self.api.add_contact(Contact::new(name, phone, email, address)) {
            Ok(result) => write_messages(&mut self.output, &result.messages)?,
            Err(e) => self.report_error("Contact not added", &e)?,
        }
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> Result<Flow> {
        let Some(name) = self.ask("Enter name to delete: ")? else {
            return Ok(Flow::Exit);
        };
        let result = self.api.delete_contact(&name)?;
        write_messages(&mut self.output, &result.messages)?;
        Ok(Flow::Continue)
    }

    fn edit(&mut self) -> Result<Flow> {
        let Some(name) = self.ask("Enter name to edit: ")? else {
            return Ok(Flow::Exit);
        };
        if !self.api.contains(&name) {
            let result = self.api.edit_contact(&name, &ContactUpdate::new())?;
            write_messages(&mut self.output, &result.messages)?;
            return Ok(Flow::Continue);
        }
        writeln!(self.output, "Editing contact: {}", name)?;

        let Some(new_name) = self.ask("Enter new name (leave blank to keep current): ")? else {
            return Ok(Flow::Exit);
        };
        let Some(phone) = self.ask_blank_or_valid(
            "Enter new phone (leave blank to keep current): ",
            is_valid_phone,
            "Invalid phone number. Keeping current.",
        )?
        else {
            return Ok(Flow::Exit);
        };
        let Some(email) = self.ask_blank_or_valid(
            "Enter new email (leave blank to keep current): ",
            is_valid_email,
            "Invalid email. Keeping current.",
        )?
        else {
            return Ok(Flow::Exit);
        };
        let Some(address) = self.ask("Enter new address (leave blank to keep current): ")? else {
            return Ok(Flow::Exit);
        };

        let update = ContactUpdate::new()
            .name(new_name)
            .phone(phone)
            .email(email)
            .address(address);
        let result = self.api.edit_contact(&name, &update)?;
        write_messages(&mut self.output, &result.messages)?;
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> Result<Flow> {
        let Some(query) = self.ask("Enter search query (name, phone, or email): ")? else {
            return Ok(Flow::Exit);
        };
        let result = self.api.search(&query)?;
        write_contact_details(&mut self.output, &result.listed_contacts)?;
        write_messages(&mut self.output, &result.messages)?;
        Ok(Flow::Continue)
    }

    fn display(&mut self) -> Result<Flow> {
        let result = self.api.list()?;
        write_contact_details(&mut self.output, &result.listed_contacts)?;
        write_messages(&mut self.output, &result.messages)?;
        Ok(Flow::Continue)
    }

    fn exit(&mut self) -> Result<()> {
        match self.api.shutdown() {
            Ok(result) => {
                write_messages(&mut self.output, &result.messages)?;
                writeln!(self.output, "Exiting and saving changes.")?;
            }
            Err(e) => {
                self.report_error("Error saving contacts", &e)?;
                writeln!(self.output, "Exiting without saving.")?;
            }
        }
        self.output.flush().map_err(AddrBookError::Io)
    }

    fn report_error(&mut self, context: &str, err: &AddrBookError) -> Result<()> {
        let message = CmdMessage::error(format!("{}: {}", context, err));
        write_messages(&mut self.output, &[message])?;
        Ok(())
    }

    /// Prompts once. `None` at end of input.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Prompts until `valid` accepts the answer.
    fn ask_until(
        &mut self,
        prompt: &str,
        valid: fn(&str) -> bool,
        complaint: &str,
    ) -> Result<Option<String>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            if valid(&answer) {
                return Ok(Some(answer));
            }
            writeln!(self.output, "{}", complaint)?;
        }
    }

    /// Like [`Self::ask_until`], but a blank answer is accepted as "keep".
    fn ask_blank_or_valid(
        &mut self,
        prompt: &str,
        valid: fn(&str) -> bool,
        complaint: &str,
    ) -> Result<Option<String>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            if answer.is_empty() || valid(&answer) {
                return Ok(Some(answer));
            }
            writeln!(self.output, "{}", complaint)?;
        }
    }
}
