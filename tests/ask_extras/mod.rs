use std::sync::Mutex;

use llm::{
    chat::{ChatMessage, ChatProvider, ChatResponse, Tool},
    error::LLMError,
};

#[macro_export]
macro_rules! assert_answers {
    (
        $(
            $test_name:ident : response => $response:expr, answer => $answer:expr
        ),+ $(,)?
    ) => {
        $(
            #[tokio::test]
            async fn $test_name() {
                let provider = StubLlmProvider::answering($response);
                let context = catalogqa::ask::AskContext { model: &provider };
                let request = catalogqa::QueryRequest {
                    document_text: "A,B\n1,2".to_owned(),
                    user_question: "What is B?".to_owned(),
                };
                let result = catalogqa::answer_query(&request, &context)
                    .await
                    .expect("Expected successful answer.");

                assert_that(&result.answer_text).is_equal_to($answer.to_owned());
            }
        )+
    }
}

/// Chat provider returning a canned answer or error, recording every prompt it sees.
pub(crate) struct StubLlmProvider {
    response: Result<String, String>,
    prompts: Mutex<Vec<String>>,
}

impl StubLlmProvider {
    pub fn answering(answer: &str) -> Self {
        StubLlmProvider {
            response: Ok(answer.to_owned()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: &str) -> Self {
        StubLlmProvider {
            response: Err(error.to_owned()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("Prompt log poisoned").clone()
    }
}

impl ChatProvider for StubLlmProvider {
    fn chat<'life0, 'life1, 'async_trait>(
        &'life0 self,
        messages: &'life1 [ChatMessage],
    ) -> ::core::pin::Pin<
        Box<
            dyn ::core::future::Future<Output = Result<Box<dyn ChatResponse>, LLMError>>
                + ::core::marker::Send
                + 'async_trait,
        >,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            #[derive(Debug)]
            struct StringResponse(String);

            impl ChatResponse for StringResponse {
                fn text(&self) -> Option<String> {
                    Some(self.0.clone())
                }

                fn tool_calls(&self) -> Option<Vec<llm::ToolCall>> {
                    panic!()
                }

                fn thinking(&self) -> Option<String> {
                    None
                }

                fn usage(&self) -> Option<llm::chat::Usage> {
                    None
                }
            }

            impl std::fmt::Display for StringResponse {
                fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(formatter, "{}", self.0)
                }
            }

            self.prompts
                .lock()
                .expect("Prompt log poisoned")
                .extend(messages.iter().map(|message| message.content.clone()));

            match &self.response {
                Ok(answer) => {
                    Ok(Box::new(StringResponse(answer.clone())) as Box<dyn ChatResponse>)
                }
                Err(error) => Err(LLMError::ProviderError(error.clone())),
            }
        })
    }

    fn chat_with_tools<'life0, 'life1, 'life2, 'async_trait>(
        &'life0 self,
        _messages: &'life1 [ChatMessage],
        _tools: Option<&'life2 [Tool]>,
    ) -> ::core::pin::Pin<
        Box<
            dyn ::core::future::Future<Output = Result<Box<dyn ChatResponse>, LLMError>>
                + ::core::marker::Send
                + 'async_trait,
        >,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        'life2: 'async_trait,
        Self: 'async_trait,
    {
        panic!()
    }
}
