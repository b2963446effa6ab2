use std::io::{BufRead, Write};

use log::{info, warn};

use crate::auth::{validate_credentials, AuthError, CredentialStore};

use super::input::InputReader;

/// Entries of the start menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Login,
    Register,
    Quit,
}

fn parse_choice(input: &str) -> Result<MenuChoice, String> {
    match input.to_ascii_lowercase().as_str() {
        "1" | "l" | "login" => Ok(MenuChoice::Login),
        "2" | "r" | "register" => Ok(MenuChoice::Register),
        "3" | "q" | "quit" | "exit" => Ok(MenuChoice::Quit),
        other => Err(format!("'{}' is not a menu option", other)),
    }
}

/// Run the login/register menu until a user is signed in or quits.
///
/// Returns the signed-in username, or `None` if the user chose to quit.
/// Invalid or rejected credentials are reported and the menu shown again;
/// only store failures are returned as errors.
pub fn login_menu<S, B, W>(
    store: &mut S,
    input: &mut InputReader<B, W>,
) -> anyhow::Result<Option<String>>
where
    S: CredentialStore + ?Sized,
    B: BufRead,
    W: Write,
{
    loop {
        input.say("\n1) Log in\n2) Register\n3) Quit")?;
        let choice = input.read_input("Choose an option:", parse_choice)?;
        if choice == MenuChoice::Quit {
            return Ok(None);
        }

        let username = input.read_line("Username:")?.to_string();
        let password = input.read_line("Password:")?.to_string();
        if let Err(e) = validate_credentials(&username, &password) {
            warn!("rejected credentials: {}", e);
            input.say(&e)?;
            continue;
        }

        let outcome = if choice == MenuChoice::Login {
            store
                .verify(&username, &password)?
                .then_some(())
                .ok_or(AuthError::AuthenticationFailed("unknown username or wrong password"))
        } else {
            store
                .register(&username, &password)?
                .then_some(())
                .ok_or(AuthError::AuthenticationFailed("username is already taken"))
        };
        match outcome {
            Ok(()) => {
                info!("{} signed in", username);
                input.say(format!("Welcome, {}!", username))?;
                return Ok(Some(username));
            }
            Err(e) => {
                warn!("{}", e);
                input.say(&e)?;
            }
        }
    }
}
