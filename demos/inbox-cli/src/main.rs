// bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::env;
use std::fmt::{Display, Formatter};

use anyhow::Result;
use bandstand_core_client::dtos::{Conversation, ConversationId, Message, NavigationParams};
use bandstand_core_client::{Client, ClientDelegate, ClientEvent};
use common::{enable_debug_logging, load_config, Level};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use url::Url;

async fn configure_client() -> Result<Client> {
    let config = load_config();

    let client = Client::builder()
        .set_api_url(config.api_url)
        .set_socket_url(config.socket_url)
        .set_delegate(Some(Box::new(Delegate {})))
        .build();

    client.set_token(config.token);

    println!("Connecting to realtime bridge…");
    client.connect().await?;
    println!("Connected.");

    Ok(client)
}

fn select_command() -> Selection {
    let options: Vec<Selection> = Selection::iter().collect();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("What do you want to do?")
        .default(0)
        .items(&options[..])
        .interact()
        .ok();

    let Some(selection) = selection else {
        return Selection::Noop;
    };

    println!();
    options[selection].clone()
}

fn prompt_string(prompt: impl Into<String>) -> String {
    let input = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .unwrap();
    println!();
    input
}

fn prompt_navigation_url() -> NavigationParams {
    let input = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter inbox URL (e.g. /messages?recipientId=u1&listingId=l1)")
        .default("/messages".to_string())
        .interact_text()
        .unwrap();
    println!();

    let base = Url::parse("https://bandstand.local").unwrap();
    NavigationParams::from_url(&base.join(&input).unwrap_or(base))
}

fn select_conversation(client: &Client) -> Option<ConversationId> {
    let conversations = client
        .inbox
        .conversations()
        .into_iter()
        .map(ConversationEnvelope)
        .collect::<Vec<_>>();

    if conversations.is_empty() {
        println!("No conversations loaded.");
        return None;
    }

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select a conversation")
        .default(0)
        .items(&conversations)
        .interact_opt()
        .ok()
        .flatten()?;
    println!();

    Some(conversations[selection].0.id.clone())
}

fn print_thread(client: &Client) {
    let Some(conversation) = client.inbox.selected_conversation() else {
        println!("No conversation selected.");
        return;
    };

    println!("Thread with {}", ConversationEnvelope(conversation.clone()));

    for message in client.inbox.messages() {
        println!("  {}", MessageEnvelope(message));
    }

    let typing = client.inbox.composing_users(&conversation.id);
    if !typing.is_empty() {
        println!(
            "  {} typing…",
            typing
                .iter()
                .map(|user| user.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
}

struct ConversationEnvelope(Conversation);
struct MessageEnvelope(Message);

impl Display for ConversationEnvelope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<24} | {:<30} | {:>3} unread | {}",
            self.0.name,
            self.0
                .listing
                .as_ref()
                .map(|listing| listing.title.as_str())
                .unwrap_or("<no listing>"),
            self.0.unread_count,
            self.0.last_message,
        )
    }
}

impl Display for MessageEnvelope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.0.timestamp.format("%Y-%m-%d %H:%M"),
            self.0.sender_id,
            self.0.content
        )
    }
}

#[derive(Debug, Display, EnumIter, Clone)]
enum Selection {
    #[strum(serialize = "Open inbox from URL")]
    OpenInbox,
    #[strum(serialize = "Load conversations")]
    LoadConversations,
    #[strum(serialize = "Select conversation")]
    SelectConversation,
    #[strum(serialize = "Show thread")]
    ShowThread,
    #[strum(serialize = "Load older messages")]
    LoadOlderMessages,
    #[strum(serialize = "Send message")]
    SendMessage,
    #[strum(serialize = "Show unread count")]
    ShowUnreadCount,
    #[strum(serialize = "Dismiss error")]
    DismissError,
    #[strum(serialize = "Disconnect")]
    Disconnect,
    #[strum(serialize = "Noop")]
    Noop,
    #[strum(serialize = "Exit")]
    Exit,
}

struct Delegate {}

impl ClientDelegate for Delegate {
    fn handle_event(&self, client: Client, event: ClientEvent) {
        tokio::spawn(async move {
            match Self::_handle_event(client, event).await {
                Ok(_) => (),
                Err(err) => println!("Failed to handle event. {}", err),
            }
        });
    }
}

impl Delegate {
    async fn _handle_event(client: Client, event: ClientEvent) -> Result<()> {
        match event {
            ClientEvent::ScrollToBottomRequested { conversation_id } => {
                if let Some(message) = client.inbox.messages().last() {
                    println!(
                        "\nNew message in {}: {}",
                        conversation_id,
                        MessageEnvelope(message.clone())
                    );
                }
            }
            ClientEvent::ErrorChanged => {
                if let Some(error) = client.inbox.snapshot().error {
                    println!("\nError: {}", error);
                }
            }
            ClientEvent::BootstrapChanged => {
                if let Some(notice) = client.inbox.snapshot().starting_notice {
                    println!("\n{}", notice);
                }
            }
            ClientEvent::ConnectionStatusChanged { state } => {
                println!("\nConnection state: {:?}", state);
            }
            ClientEvent::UnreadCountChanged { count } => {
                println!("\nUnread messages: {}", count);
            }
            _ => (),
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env::set_var("RUST_BACKTRACE", "1");
    enable_debug_logging(Level::TRACE);

    let client = configure_client().await?;

    loop {
        println!();

        match select_command() {
            Selection::OpenInbox => {
                let params = prompt_navigation_url();
                client.inbox.unmount().await;
                client.inbox.mount(&params).await?;
                print_thread(&client);
            }
            Selection::LoadConversations => {
                client.inbox.load_conversations().await?;
                for conversation in client.inbox.conversations() {
                    println!("{}", ConversationEnvelope(conversation));
                }
            }
            Selection::SelectConversation => {
                if let Some(conversation_id) = select_conversation(&client) {
                    client
                        .inbox
                        .select_conversation(Some(conversation_id))
                        .await?;
                    print_thread(&client);
                }
            }
            Selection::ShowThread => {
                client.inbox.load_messages().await?;
                print_thread(&client);
            }
            Selection::LoadOlderMessages => {
                client.inbox.load_older_messages().await?;
                print_thread(&client);
            }
            Selection::SendMessage => {
                let text = prompt_string("Enter message");
                client.composer.set_input(text).await;
                client.composer.send().await?;
            }
            Selection::ShowUnreadCount => {
                client.inbox.refresh_unread_count().await?;
                println!("Unread messages: {}", client.inbox.unread_count());
            }
            Selection::DismissError => {
                client.inbox.dismiss_error();
            }
            Selection::Disconnect => {
                client.disconnect().await;
            }
            Selection::Noop => {}
            Selection::Exit => {
                println!("Bye bye!");
                client.inbox.unmount().await;
                client.disconnect().await;
                break;
            }
        }
    }

    Ok(())
}
