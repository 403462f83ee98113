//! Walks one assistant through its whole life: create it, seed a thread,
//! post a message, read the thread back and delete the assistant.
//!
//! Run with `OPENAI_API_KEY` set; `RUST_LOG=integrations_assistants=debug`
//! shows every exchange.

use integrations_assistants::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> AssistantsResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = AssistantsClientBuilder::new().from_env()?.build()?;

    let assistant = client
        .assistants()
        .create(
            AssistantRequest::new(
                "gpt-4o",
                "Math Tutor",
                "You are a personal math tutor. Answer briefly.",
            )
            .with_tool(Tool::code_interpreter()),
        )
        .await?;

    let assistant_id = match assistant.id {
        Some(id) => id,
        None => {
            eprintln!("service returned an assistant without an id");
            return Ok(());
        }
    };
    println!("created assistant {}", assistant_id);

    let thread = client
        .threads()
        .create(
            CreateThreadRequest::for_assistant(&assistant_id)
                .with_message(Message::user("I need to solve 3x + 11 = 14.")),
        )
        .await?;
    println!("created thread {}", thread.id);

    let message = client
        .messages()
        .create(
            &thread.id,
            CreateMessageRequest::text(MessageRole::User, "Can you show each step?"),
        )
        .await?;
    println!("posted message {:?}: {}", message.id, message.text());

    let fetched = client.threads().retrieve(&thread.id).await?;
    match fetched.created_at_datetime() {
        Some(created) => println!("thread {} created at {}", fetched.id, created.to_rfc3339()),
        None => println!("thread {} has no creation time", fetched.id),
    }

    client.assistants().delete(&assistant_id).await?;
    println!("deleted assistant {}", assistant_id);

    Ok(())
}
