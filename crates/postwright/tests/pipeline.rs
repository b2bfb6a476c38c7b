use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use chrono::{NaiveDate, NaiveTime};
use postwright::{
    ApiKey, EventInput, EventPostGenerator, FailureKind, PlatformCatalog, PlatformSpec,
    PostwrightError, ProviderAdapter, ProviderId, ProviderRegistry, Result, Submission, Tone,
    ValidationError,
    generic::{GeneratedImage, GeneratedText},
    provider::{
        BoxFuture, ImageGenerationParameters, ImageGenerationProvider, TextGenerationParameters,
        TextGenerationProvider,
    },
};

/// Every call the mocks receive, in order: `("text" | "image", prompt)`.
type CallLog = Arc<Mutex<Vec<(&'static str, String)>>>;

/// Replies to platform prompts with canned posts picked by platform name.
struct MockText {
    id: ProviderId,
    log: CallLog,
    fail_with: Option<fn() -> PostwrightError>,
    delay: Duration,
}

impl MockText {
    fn new(id: ProviderId, log: CallLog) -> Self {
        Self {
            id,
            log,
            fail_with: None,
            delay: Duration::ZERO,
        }
    }
}

fn canned_post(prompt: &str) -> String {
    if prompt.contains("Create a LinkedIn post") {
        "Join us for Tech Meetup at Hall A! #tech #community".into()
    } else if prompt.contains("Create a Twitter post") {
        "Tech Meetup tonight at Hall A 🎉 #devs".into()
    } else {
        "x".repeat(600)
    }
}

impl TextGenerationProvider for MockText {
    fn provider_id(&self) -> ProviderId {
        self.id
    }

    fn generate_text<'p>(
        &'p self,
        _api_key: &'p ApiKey,
        params: TextGenerationParameters,
    ) -> BoxFuture<'p, Result<GeneratedText>> {
        Box::pin(async move {
            let prompt = params.joined_content();
            self.log.lock().unwrap().push(("text", prompt.clone()));
            tokio::time::sleep(self.delay).await;

            match self.fail_with {
                Some(error) => Err(error()),
                None => Ok(GeneratedText {
                    text: canned_post(&prompt),
                    usage: None,
                }),
            }
        })
    }
}

struct MockImage {
    log: CallLog,
    fail: bool,
}

impl ImageGenerationProvider for MockImage {
    fn provider_id(&self) -> ProviderId {
        ProviderId::OpenAi
    }

    fn generate_image<'p>(
        &'p self,
        _api_key: &'p ApiKey,
        params: ImageGenerationParameters,
    ) -> BoxFuture<'p, Result<GeneratedImage>> {
        Box::pin(async move {
            self.log.lock().unwrap().push(("image", params.prompt));
            if self.fail {
                Err(PostwrightError::Api {
                    status: 400,
                    body: "Your request was rejected by the safety system.".into(),
                })
            } else {
                Ok(GeneratedImage {
                    url: "https://images.example/meetup.png".into(),
                    revised_prompt: None,
                })
            }
        })
    }
}

fn tech_meetup() -> EventInput {
    EventInput::new(
        "Tech Meetup",
        "Monthly gathering of local developers",
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
        "Hall A",
    )
}

fn generator(registry: ProviderRegistry) -> EventPostGenerator {
    EventPostGenerator::new(
        ProviderAdapter::new(registry, Duration::from_secs(60)),
        PlatformCatalog::default(),
    )
}

fn calls(log: &CallLog) -> Vec<(&'static str, String)> {
    log.lock().unwrap().clone()
}

#[tokio::test]
async fn blank_fields_block_generation_without_calls() {
    let log = CallLog::default();
    let generator = generator(
        ProviderRegistry::new().with_text(Arc::new(MockText::new(ProviderId::Claude, log.clone()))),
    );

    let mut event = tech_meetup();
    event.description = "   ".into();
    let submission = Submission::new(event, ProviderId::Claude, ApiKey::new("sk-ant"));

    let err = generator.generate(&submission).await.unwrap_err();
    assert_eq!(err, ValidationError::MissingField("event description"));
    assert!(calls(&log).is_empty());
}

#[tokio::test]
async fn missing_key_blocks_generation_without_calls() {
    let log = CallLog::default();
    let generator = generator(
        ProviderRegistry::new().with_text(Arc::new(MockText::new(ProviderId::Claude, log.clone()))),
    );

    let submission = Submission::new(tech_meetup(), ProviderId::Claude, ApiKey::new(""));
    let err = generator.generate(&submission).await.unwrap_err();
    assert_eq!(err, ValidationError::MissingApiKey);
    assert!(calls(&log).is_empty());
}

#[tokio::test]
async fn tech_meetup_with_claude_produces_three_checked_posts() {
    let log = CallLog::default();
    let generator = generator(
        ProviderRegistry::new().with_text(Arc::new(MockText::new(ProviderId::Claude, log.clone()))),
    );
    let submission = Submission::new(tech_meetup(), ProviderId::Claude, ApiKey::new("sk-ant"))
        .with_tone(Tone::Casual);

    let report = generator.generate(&submission).await.unwrap();

    let calls = calls(&log);
    assert_eq!(calls.len(), 3);
    for (kind, prompt) in &calls {
        assert_eq!(*kind, "text");
        assert!(prompt.contains("Tech Meetup"));
        assert!(prompt.contains("Hall A"));
        assert!(prompt.contains("casual"));
    }

    let platforms: Vec<_> = report.results.iter().map(|r| r.platform.as_str()).collect();
    assert_eq!(platforms, ["LinkedIn", "Twitter", "WhatsApp"]);
    assert!(report.image.is_none());

    for result in &report.results {
        let text = result.text().unwrap();
        assert_eq!(result.character_count(), Some(text.chars().count()));
        assert!(result.is_copyable());
    }

    let whatsapp = report.result("WhatsApp").unwrap();
    assert_eq!(whatsapp.character_count(), Some(600));
    assert!(!whatsapp.within_limit());
    assert!(report.result("Twitter").unwrap().within_limit());
}

#[tokio::test]
async fn image_is_generated_once_before_any_post() {
    let log = CallLog::default();
    let generator = generator(
        ProviderRegistry::new()
            .with_text(Arc::new(MockText::new(ProviderId::OpenAi, log.clone())))
            .with_image(Arc::new(MockImage {
                log: log.clone(),
                fail: false,
            })),
    );
    let submission = Submission::new(tech_meetup(), ProviderId::OpenAi, ApiKey::new("sk-test"))
        .with_image(true);

    let report = generator.generate(&submission).await.unwrap();

    let kinds: Vec<_> = calls(&log).into_iter().map(|(kind, _)| kind).collect();
    assert_eq!(kinds, ["image", "text", "text", "text"]);

    let image_prompt = &calls(&log)[0].1;
    assert!(image_prompt.contains("Tech Meetup"));
    assert!(image_prompt.contains("human faces"));

    assert_eq!(report.image_url(), Some("https://images.example/meetup.png"));
    for result in &report.results {
        assert_eq!(
            result.image_url.as_deref(),
            Some("https://images.example/meetup.png")
        );
    }
}

#[tokio::test]
async fn image_failure_leaves_posts_untouched() {
    let log = CallLog::default();
    let generator = generator(
        ProviderRegistry::new()
            .with_text(Arc::new(MockText::new(ProviderId::OpenAi, log.clone())))
            .with_image(Arc::new(MockImage {
                log: log.clone(),
                fail: true,
            })),
    );
    let submission = Submission::new(tech_meetup(), ProviderId::OpenAi, ApiKey::new("sk-test"))
        .with_image(true);

    let report = generator.generate(&submission).await.unwrap();

    let failure = report.image.as_ref().unwrap().as_ref().unwrap_err();
    assert!(failure.to_string().starts_with("Error with OpenAI:"));
    assert_eq!(report.image_url(), None);

    assert_eq!(report.results.len(), 3);
    for result in &report.results {
        assert!(result.text().is_some());
        assert_eq!(result.image_url, None);
    }
}

#[tokio::test]
async fn image_request_is_skipped_for_text_only_providers() {
    let log = CallLog::default();
    let generator = generator(
        ProviderRegistry::new().with_text(Arc::new(MockText::new(ProviderId::Gemini, log.clone()))),
    );
    let submission = Submission::new(tech_meetup(), ProviderId::Gemini, ApiKey::new("AIza"))
        .with_image(true);

    let report = generator.generate(&submission).await.unwrap();

    assert!(report.image.is_none());
    assert!(calls(&log).iter().all(|(kind, _)| *kind == "text"));
}

#[tokio::test]
async fn provider_failures_become_error_results() {
    let log = CallLog::default();
    let mut mock = MockText::new(ProviderId::Claude, log.clone());
    mock.fail_with = Some(|| PostwrightError::Api {
        status: 429,
        body: "rate_limit_error: Number of requests has exceeded your rate limit".into(),
    });
    let generator = generator(ProviderRegistry::new().with_text(Arc::new(mock)));
    let submission = Submission::new(tech_meetup(), ProviderId::Claude, ApiKey::new("sk-ant"));

    let report = generator.generate(&submission).await.unwrap();

    assert_eq!(calls(&log).len(), 3);
    for result in &report.results {
        let failure = result.failure().unwrap();
        assert_eq!(failure.kind, FailureKind::RateLimited);
        assert!(result.display_text().starts_with("Error"));
        assert!(!result.is_copyable());
        assert_eq!(result.character_count(), None);
    }
}

#[tokio::test(start_paused = true)]
async fn slow_provider_times_out_per_platform() {
    let log = CallLog::default();
    let mut mock = MockText::new(ProviderId::Gemini, log.clone());
    mock.delay = Duration::from_secs(600);
    let generator = generator(ProviderRegistry::new().with_text(Arc::new(mock)));
    let submission = Submission::new(tech_meetup(), ProviderId::Gemini, ApiKey::new("AIza"));

    let report = generator.generate(&submission).await.unwrap();

    for result in &report.results {
        assert_eq!(result.failure().unwrap().kind, FailureKind::Timeout);
    }
}

#[tokio::test]
async fn concurrent_generation_keeps_catalog_order() {
    let log = CallLog::default();
    let catalog = PlatformCatalog::new(vec![
        PlatformSpec::whatsapp(),
        PlatformSpec::new("Mastodon", 500, "friendly toot", "Use a couple of hashtags"),
        PlatformSpec::twitter(),
    ])
    .unwrap();
    let generator = EventPostGenerator::new(
        ProviderAdapter::new(
            ProviderRegistry::new()
                .with_text(Arc::new(MockText::new(ProviderId::OpenAi, log.clone()))),
            Duration::from_secs(60),
        ),
        catalog,
    )
    .with_concurrent_platforms(true);
    let submission = Submission::new(tech_meetup(), ProviderId::OpenAi, ApiKey::new("sk-test"));

    let report = generator.generate(&submission).await.unwrap();

    let platforms: Vec<_> = report.results.iter().map(|r| r.platform.as_str()).collect();
    assert_eq!(platforms, ["WhatsApp", "Mastodon", "Twitter"]);
    assert_eq!(calls(&log).len(), 3);
    assert!(
        calls(&log)
            .iter()
            .any(|(_, prompt)| prompt.contains("Create a Mastodon post"))
    );
}
