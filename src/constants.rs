/// Route accepting chat payloads, matching the OpenAI-compatible path clients already target
pub const CHAT_COMPLETIONS_ROUTE: &str = "/v1/chat/completions";

/// Address the server listens on when none is configured
pub const DEFAULT_ADDRESS: &str = "localhost:8080";

/// Column width plain transcripts are wrapped to
pub const DEFAULT_WRAP_WIDTH: usize = 70;

/// Number of separator glyphs in a banner line
pub const BANNER_WIDTH: usize = 80;

/// Glyph repeated to build banner lines
pub const BANNER_GLYPH: char = '═';

/// Title printed between the opening banner lines
pub const TRANSCRIPT_TITLE: &str = "💬 CHAT";

pub const SYSTEM_SYMBOL: &str = "⚙️";
pub const USER_SYMBOL: &str = "👤";
pub const ASSISTANT_SYMBOL: &str = "🤖";
pub const UNKNOWN_SYMBOL: &str = "❓";

/// Name of the per-user config file looked up under the platform config directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Application directory name under the platform config directory
pub const APP_DIR_NAME: &str = "promptscope";
