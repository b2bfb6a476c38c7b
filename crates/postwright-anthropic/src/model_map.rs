use std::borrow::Cow;

use postwright_core::model::{AnthropicModel, Model};

pub const CLAUDE_3_SONNET: &str = "claude-3-sonnet-20240229";

pub(crate) fn map_model(model: &Model) -> Option<Cow<'static, str>> {
    match model {
        Model::Custom(custom) => Some(Cow::Borrowed(custom)),
        Model::Anthropic(AnthropicModel::Claude3Sonnet) => Some(CLAUDE_3_SONNET.into()),
        _ => None,
    }
}
