use std::time::Duration;

use acceso_app_core::{LoginFlow, RegisterFlow, RegisterOptions, Submission};
use acceso_core::AuthState;
use anyhow::bail;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::Ports;

fn describe(state: &AuthState) -> String {
    match state {
        AuthState::Idle => "idle".to_string(),
        AuthState::Loading => "loading".to_string(),
        AuthState::Success => "success".to_string(),
        AuthState::Error(message) => format!("error: {message}"),
    }
}

/// Prints every state the flow publishes, spinning while it is `Loading`.
/// Ends once the flow (and with it the sender) is dropped.
fn report_transitions(mut rx: watch::Receiver<AuthState>, label: &'static str) -> JoinHandle<()> {
    tokio::spawn(async move {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );

        while rx.changed().await.is_ok() {
            let state = rx.borrow_and_update().clone();
            pb.println(format!("   -> {}", describe(&state)));
            if state.is_loading() {
                pb.set_message(label);
                pb.enable_steady_tick(Duration::from_millis(100));
            } else {
                pb.disable_steady_tick();
            }
        }
        pb.finish_and_clear();
    })
}

fn conclude(outcome: Submission, done: &str) -> anyhow::Result<()> {
    match outcome {
        Submission::Finished(AuthState::Success) => {
            println!(":: {done}");
            Ok(())
        }
        Submission::Finished(AuthState::Error(message)) => bail!("{message}"),
        Submission::Finished(other) => bail!("flow stopped in state {}", describe(&other)),
        Submission::Ignored => bail!("another attempt is already in progress"),
    }
}

pub async fn cmd_login(ports: &Ports, email: String, password: String) -> anyhow::Result<()> {
    println!(":: Signing in");
    println!("   Email: {}", email);

    let flow = LoginFlow::new(ports.auth.clone());
    let reporter = report_transitions(flow.subscribe(), "Signing in...");
    let outcome = flow.submit(email, password).await;
    drop(flow);
    reporter.await?;

    conclude(outcome, "Signed in.")
}

pub async fn cmd_register(
    ports: &Ports,
    options: RegisterOptions,
    name: String,
    email: String,
    password: String,
    confirmation: String,
) -> anyhow::Result<()> {
    println!(":: Registering account");
    println!("   Name:  {}", name);
    println!("   Email: {}", email);

    let flow = RegisterFlow::with_options(ports.auth.clone(), ports.documents.clone(), options);
    let reporter = report_transitions(flow.subscribe(), "Creating account...");
    let outcome = flow.submit(name, email, password, confirmation).await;
    drop(flow);
    reporter.await?;

    conclude(outcome, "Account created.")
}
