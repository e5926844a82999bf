use callsight::application::ports::LlmClient;
use callsight::infrastructure::llm::MockLlmClient;

#[tokio::test]
async fn given_script_when_completing_then_responses_follow_call_order_and_cycle() {
    let client = MockLlmClient::scripted(["one", "two"]);

    let mut answers = Vec::new();
    for _ in 0..3 {
        answers.push(client.complete("p").await.unwrap());
    }

    assert_eq!(answers, ["one", "two", "one"]);
}

#[tokio::test]
async fn given_prompts_when_completing_then_each_is_recorded() {
    let client = MockLlmClient::default();

    client.complete("first").await.unwrap();
    client.complete("second").await.unwrap();

    assert_eq!(client.prompts(), ["first", "second"]);
}

#[tokio::test]
async fn given_matching_rules_when_completing_then_answer_depends_only_on_prompt() {
    let client = MockLlmClient::matching([("separate", "SEP"), ("summarize", "SUM")]);

    let summary = client.complete("please summarize this").await.unwrap();
    let separation = client.complete("please separate this").await.unwrap();
    let repeat = client.complete("summarize again").await.unwrap();

    assert_eq!(summary, "SUM");
    assert_eq!(separation, "SEP");
    assert_eq!(repeat, "SUM");
}

#[tokio::test]
async fn given_no_matching_rule_when_completing_then_empty_completion() {
    let client = MockLlmClient::matching([("separate", "SEP")]);

    assert_eq!(client.complete("unrelated").await.unwrap(), "");
}
