use gemini_studio::{
    api::{GeneratedImage, InlineImage, MockChatClient, MockImageClient},
    session::{ChatSession, ImageSession},
    Error,
};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_chat_workflow_with_mocks() {
    let mut session = ChatSession::new(Box::new(
        MockChatClient::new()
            .with_reply("Dreams are stories the mind tells".to_string())
            .with_reply("They help consolidate memory".to_string()),
    ));

    let first = session.ask("what are dreams?").await.unwrap();
    assert_eq!(first.reply, "Dreams are stories the mind tells");

    let second = session.ask("why do we have them?").await.unwrap();
    assert_eq!(second.reply, "They help consolidate memory");

    // History preserves call order, prompts included.
    let history = session.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].prompt, "what are dreams?");
    assert_eq!(history[1].prompt, "why do we have them?");
}

#[tokio::test]
async fn test_history_survives_many_exchanges_in_order() {
    let mut session = ChatSession::new(Box::new(MockChatClient::new()));

    for i in 0..20 {
        session.ask(&format!("question {}", i)).await.unwrap();
    }

    let history = session.history();
    assert_eq!(history.len(), 20);
    for (i, exchange) in history.iter().enumerate() {
        assert_eq!(exchange.prompt, format!("question {}", i));
    }
}

#[tokio::test]
async fn test_image_workflow_with_mocks() {
    let image_bytes = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    let mut session = ImageSession::new(Box::new(MockImageClient::new().with_response(
        GeneratedImage {
            text: Some("A lighthouse at dusk".to_string()),
            images: vec![InlineImage {
                bytes: image_bytes.clone(),
                mime_type: "image/png".to_string(),
            }],
        },
    )));

    let outcome = session.generate("a lighthouse at dusk").await.unwrap();
    assert_eq!(outcome.text.as_deref(), Some("A lighthouse at dusk"));

    let resource = outcome.resource.as_ref().unwrap();
    assert_eq!(resource.mime_type(), "image/png");
    assert_eq!(std::fs::read(resource.path()).unwrap(), image_bytes);

    // Download is a lossless passthrough under the fixed filename.
    let dir = tempfile::tempdir().unwrap();
    let written = session.download(dir.path()).unwrap();
    assert_eq!(
        written.file_name().unwrap().to_str().unwrap(),
        "gemini-generated-image.png"
    );
    assert_eq!(std::fs::read(&written).unwrap(), image_bytes);
}

#[tokio::test]
async fn test_regeneration_releases_previous_temp_file() {
    let mut session = ImageSession::new(Box::new(
        MockImageClient::new()
            .with_image(vec![0x01], "image/png")
            .with_image(vec![0x02], "image/png")
            .with_image(vec![0x03], "image/png"),
    ));

    let mut previous_paths = Vec::new();
    for prompt in ["first", "second", "third"] {
        let outcome = session.generate(prompt).await.unwrap();
        previous_paths.push(outcome.resource.as_ref().unwrap().path().to_path_buf());
    }

    // Only the latest temp file remains.
    assert!(!previous_paths[0].exists());
    assert!(!previous_paths[1].exists());
    assert!(previous_paths[2].exists());
}

#[tokio::test]
async fn test_whitespace_prompts_short_circuit_both_pipelines() {
    let mut chat = ChatSession::new(Box::new(MockChatClient::new()));
    let mut image = ImageSession::new(Box::new(MockImageClient::new()));

    for raw in ["", "  ", "\t", "\n\n\n", "   \r\n   "] {
        assert!(matches!(
            chat.ask(raw).await.unwrap_err(),
            Error::Validation(_)
        ));
        assert!(matches!(
            image.generate(raw).await.unwrap_err(),
            Error::Validation(_)
        ));
    }

    assert!(chat.history().is_empty());
    assert!(image.current().is_none());
}
