use std::borrow::Cow;

use postwright_core::model::{Model, OpenAiModel};

pub const GPT3_5_TURBO: &str = "gpt-3.5-turbo";
pub const DALL_E_3: &str = "dall-e-3";

pub(crate) fn map_model(model: &Model) -> Option<Cow<'static, str>> {
    if let Model::Custom(custom) = model {
        return Some(Cow::Borrowed(custom));
    }

    let Model::OpenAi(openai_model) = model else {
        return None;
    };

    match openai_model {
        OpenAiModel::Gpt35Turbo => Some(GPT3_5_TURBO.into()),
        OpenAiModel::DallE3 => Some(DALL_E_3.into()),
    }
}
