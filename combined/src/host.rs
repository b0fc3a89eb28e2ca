//! Terminal host for the create-user form.
//!
//! Owns the "user created" flag, feeds input events into the form, and
//! renders the form's view as plain text or JSON.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use common::AppResult;
use create_user_form::{
    CreateUserForm, FormEvent, FormView, SubmitEvent, SubmitOutcome, UserCreatedFlag,
    ValidationOptions,
};

/// Run prompts until a user is created or input ends.
///
/// Returns whether a user was created.
pub fn run_interactive<R: BufRead, W: Write>(
    options: ValidationOptions,
    input: R,
    out: &mut W,
) -> AppResult<bool> {
    let user_was_created = UserCreatedFlag::new();
    let mut form = CreateUserForm::with_options(user_was_created.clone(), options);
    let mut lines = input.lines();
    let mut attempts = 0u32;

    while !user_was_created.get() {
        let Some(username) = prompt(&mut lines, out, "Username")? else {
            break;
        };
        form.handle_event(FormEvent::UsernameChanged(username));

        let Some(password) = prompt(&mut lines, out, "Password")? else {
            break;
        };
        form.handle_event(FormEvent::PasswordChanged(password));

        attempts += 1;
        form.handle_event(FormEvent::submit());
        render_text(&form.view(), out)?;
    }

    if user_was_created.get() {
        info!(attempts, "Interactive session created a user");
        writeln!(out, "User created")?;
    } else {
        debug!(attempts, "Input ended before a user was created");
    }

    Ok(user_was_created.get())
}

fn prompt<I, W>(lines: &mut I, out: &mut W, label: &str) -> AppResult<Option<String>>
where
    I: Iterator<Item = std::io::Result<String>>,
    W: Write,
{
    write!(out, "{}: ", label)?;
    out.flush()?;
    Ok(lines.next().transpose()?)
}

/// Submit one username/password pair and print the result.
pub fn submit_once<W: Write>(
    options: ValidationOptions,
    username: &str,
    password: &str,
    json: bool,
    out: &mut W,
) -> AppResult<SubmitOutcome> {
    let user_was_created = UserCreatedFlag::new();
    let mut form = CreateUserForm::with_options(user_was_created.clone(), options);
    form.set_username(username);
    form.set_password(password);

    let mut event = SubmitEvent::new();
    let outcome = form.submit(&mut event);

    if json {
        let body = serde_json::json!({
            "user_was_created": user_was_created.get(),
            "form": form.view(),
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
    } else {
        render_text(&form.view(), out)?;
        if user_was_created.get() {
            writeln!(out, "User created")?;
        }
    }

    Ok(outcome)
}

/// Print the active password rules in evaluation order.
pub fn print_rules<W: Write>(options: &ValidationOptions, out: &mut W) -> AppResult<()> {
    writeln!(out, "Validation mode: {}", options.mode)?;
    writeln!(out, "Username:")?;
    writeln!(out, "  - must not be blank")?;
    writeln!(out, "Password:")?;
    for rule in options.policy.rules() {
        writeln!(out, "  - [{}] {}", rule.code(), rule)?;
    }
    Ok(())
}

/// Render field messages, one per line, grouped by field.
pub fn render_text<W: Write>(view: &FormView<'_>, out: &mut W) -> AppResult<()> {
    if let Some(message) = view.username_error {
        writeln!(out, "username: {}", message)?;
    }
    for message in view.password_errors {
        writeln!(out, "password: {}", message)?;
    }
    Ok(())
}
