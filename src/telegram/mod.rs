use crate::error::Result;
use crate::notifier::MessageSender;
use async_trait::async_trait;
use log::{error, info};
use teloxide::dispatching::repls::CommandReplExt;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

pub const WELCOME_TEXT: &str = "🚀 Meme Coin Alert Bot Activated!\n\n\
    I will notify you about new meme coins with:\n\
    - High Volume\n\
    - Locked Liquidity\n\
    - Active Socials\n\
    - Low FDV";

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
pub enum Command {
    #[command(description = "Start the bot")]
    Start,
    #[command(description = "Display this help message")]
    Help,
}

/// Static reply for a command; no chat state is consulted.
pub fn reply_for(command: &Command) -> String {
    match command {
        Command::Start => WELCOME_TEXT.to_string(),
        Command::Help => Command::descriptions().to_string(),
    }
}

#[derive(Clone)]
pub struct TelegramBot {
    bot: Bot,
}

impl TelegramBot {
    pub fn new(bot_token: &str) -> Self {
        Self {
            bot: Bot::new(bot_token),
        }
    }

    pub fn sender(&self) -> TelegramSender {
        TelegramSender {
            bot: self.bot.clone(),
        }
    }

    /// Serves inbound commands until the process stops.
    pub async fn run_commands(&self) {
        info!("Listening for Telegram commands");
        Command::repl(self.bot.clone(), answer).await;
    }
}

async fn answer(bot: Bot, msg: Message, cmd: Command) -> ResponseResult<()> {
    info!("Command {:?} from chat {}", cmd, msg.chat.id);
    if let Err(e) = bot.send_message(msg.chat.id, reply_for(&cmd)).await {
        error!("Failed to reply to {:?} in chat {}: {}", cmd, msg.chat.id, e);
    }
    Ok(())
}

/// Delivers alerts through the Bot API `sendMessage` call.
#[derive(Clone)]
pub struct TelegramSender {
    bot: Bot,
}

#[async_trait]
impl MessageSender for TelegramSender {
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<()> {
        self.bot.send_message(ChatId(chat_id), text).await?;
        Ok(())
    }
}
