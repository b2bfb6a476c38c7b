use std::borrow::Cow;

use postwright_core::model::{GeminiModel, Model};

pub const GEMINI_PRO: &str = "gemini-pro";

pub(crate) fn map_model(model: &Model) -> Option<Cow<'static, str>> {
    match model {
        Model::Custom(custom) => Some(Cow::Borrowed(custom)),
        Model::Gemini(GeminiModel::GeminiPro) => Some(GEMINI_PRO.into()),
        _ => None,
    }
}
