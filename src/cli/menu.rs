// src/cli/menu.rs
use std::io::IsTerminal;

use inquire::{Confirm, InquireError};

use passmeter::generators::PasswordGenerator;
use passmeter::models::PasswordPolicy;

use super::handlers::{generate_one, print_generated};

// Generate passwords until the user declines another one
pub fn run_continuous(
    generator: &mut PasswordGenerator,
    policy: &PasswordPolicy,
    with_score: bool,
    json: bool,
) -> anyhow::Result<()> {
    let mut generated_count = 0usize;

    loop {
        let generated = generate_one(generator, policy, with_score)?;
        print_generated(&generated, json)?;
        generated_count += 1;

        if !std::io::stdin().is_terminal() {
            log::debug!("stdin is not a terminal, stopping after one password");
            break;
        }

        let another = match Confirm::new("Another?").with_default(false).prompt() {
            Ok(answer) => answer,
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => false,
            Err(InquireError::NotTTY) => {
                log::debug!("stdin is not a terminal, stopping after one password");
                false
            }
            Err(e) => return Err(e.into()),
        };

        if !another {
            break;
        }
    }

    log::debug!("Generated {} password(s)", generated_count);
    Ok(())
}
