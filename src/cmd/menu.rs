//! Interactive menu tester for the validation library.
//!
//! One line of input is read per prompt; exactly one validator runs per
//! selection, with the raw entered string passed through unchanged and the
//! fixed national-ID type code for the identifier check.

use anyhow::Result;
use std::io::{self, BufRead};

use fieldcheck::document::DOCUMENT_TYPE_NATIONAL_ID;
use fieldcheck::ui;

use super::check::{self, Field};

/// Run the interactive menu loop.
///
/// Option `9` exits; any unrecognized option prints `Select valid option`
/// and the menu reprints. A closed stdin ends the loop cleanly.
pub fn run_menu() -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_menu();

        let option = match prompt_line(&mut lines, "Option")? {
            Some(option) => option,
            None => break,
        };

        let selection = match option.trim() {
            "1" => Some((Field::Id, "Enter your ID")),
            "2" => Some((Field::Date, "Enter your date (dd/mm/yyyy)")),
            "3" => Some((Field::Age, "Enter your birth date (dd/mm/yyyy)")),
            "4" => Some((Field::PostalCode, "Enter your postal code")),
            "5" => Some((Field::Numeric, "Enter a number")),
            "6" => Some((Field::Alphabetic, "Enter a string")),
            "7" => Some((Field::Email, "Enter your email")),
            "8" => Some((Field::Name, "Enter your name")),
            "9" => {
                println!("Exit");
                break;
            }
            _ => {
                println!("Select valid option");
                None
            }
        };

        if let Some((field, prompt)) = selection {
            let value = match prompt_line(&mut lines, prompt)? {
                Some(value) => value,
                None => break,
            };

            let outcome = check::evaluate(field, &value, DOCUMENT_TYPE_NATIONAL_ID);
            check::print_outcome(field, &outcome);
        }
    }

    Ok(())
}

fn print_menu() {
    println!("{}", ui::colors::heading("Personal data validation tester:"));
    println!("1 - Check ID");
    println!("2 - Check date format");
    println!("3 - Calculate age");
    println!("4 - Check postal code");
    println!("5 - Check numeric string");
    println!("6 - Check alphabetic string");
    println!("7 - Check email");
    println!("8 - Check name");
    println!("9 - Exit");
}

/// Read one line of input for a prompt.
///
/// Uses a dialoguer prompt when stdin is a TTY, a plain buffered read when
/// input is piped. Returns `None` on end of input.
fn prompt_line(
    lines: &mut io::Lines<io::StdinLock<'static>>,
    prompt: &str,
) -> Result<Option<String>> {
    if atty::is(atty::Stream::Stdin) {
        let input: String = dialoguer::Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(Some(input))
    } else {
        println!("{}: ", prompt);
        match lines.next() {
            Some(line) => Ok(Some(line?)),
            None => Ok(None),
        }
    }
}
