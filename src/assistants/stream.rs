//! Payloads of the events emitted while streaming a run.
//!
//! Each event arrives as an `event` name plus a `data` payload; the pair is
//! decoded here from its JSON form `{"event": ..., "data": ...}`.

use serde::{Deserialize, Serialize};

use crate::OpenAiError;

use super::{
    messages::{Message, MessageDelta},
    runs::Run,
    steps::{RunStep, RunStepDelta},
    threads::Thread,
};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "event", content = "data")]
pub enum AssistantStreamEvent {
    #[serde(rename = "thread.created")]
    ThreadCreated(Thread),
    #[serde(rename = "thread.run.created")]
    ThreadRunCreated(Run),
    #[serde(rename = "thread.run.queued")]
    ThreadRunQueued(Run),
    #[serde(rename = "thread.run.in_progress")]
    ThreadRunInProgress(Run),
    #[serde(rename = "thread.run.requires_action")]
    ThreadRunRequiresAction(Run),
    #[serde(rename = "thread.run.completed")]
    ThreadRunCompleted(Run),
    #[serde(rename = "thread.run.incomplete")]
    ThreadRunIncomplete(Run),
    #[serde(rename = "thread.run.failed")]
    ThreadRunFailed(Run),
    #[serde(rename = "thread.run.cancelling")]
    ThreadRunCancelling(Run),
    #[serde(rename = "thread.run.cancelled")]
    ThreadRunCancelled(Run),
    #[serde(rename = "thread.run.expired")]
    ThreadRunExpired(Run),
    #[serde(rename = "thread.run.step.created")]
    ThreadRunStepCreated(RunStep),
    #[serde(rename = "thread.run.step.in_progress")]
    ThreadRunStepInProgress(RunStep),
    #[serde(rename = "thread.run.step.delta")]
    ThreadRunStepDelta(RunStepDelta),
    #[serde(rename = "thread.run.step.completed")]
    ThreadRunStepCompleted(RunStep),
    #[serde(rename = "thread.run.step.failed")]
    ThreadRunStepFailed(RunStep),
    #[serde(rename = "thread.run.step.cancelled")]
    ThreadRunStepCancelled(RunStep),
    #[serde(rename = "thread.run.step.expired")]
    ThreadRunStepExpired(RunStep),
    #[serde(rename = "thread.message.created")]
    ThreadMessageCreated(Message),
    #[serde(rename = "thread.message.in_progress")]
    ThreadMessageInProgress(Message),
    #[serde(rename = "thread.message.delta")]
    ThreadMessageDelta(MessageDelta),
    #[serde(rename = "thread.message.completed")]
    ThreadMessageCompleted(Message),
    #[serde(rename = "thread.message.incomplete")]
    ThreadMessageIncomplete(Message),
    #[serde(rename = "error")]
    Error(OpenAiError),
    /// `data` is the literal `[DONE]`.
    #[serde(rename = "done")]
    Done(String),
}

impl AssistantStreamEvent {
    /// Builds an event from the name and raw data of a server-sent event.
    pub fn from_parts(event: &str, data: &str) -> Result<Self, OpenAiError> {
        let data = if event == "done" {
            serde_json::Value::String(data.to_string())
        } else {
            serde_json::from_str(data)?
        };
        Ok(serde_json::from_value(
            serde_json::json!({ "event": event, "data": data }),
        )?)
    }

    /// The run carried by any `thread.run.*` event other than step events.
    pub fn run(&self) -> Option<&Run> {
        use AssistantStreamEvent::*;
        match self {
            ThreadRunCreated(run)
            | ThreadRunQueued(run)
            | ThreadRunInProgress(run)
            | ThreadRunRequiresAction(run)
            | ThreadRunCompleted(run)
            | ThreadRunIncomplete(run)
            | ThreadRunFailed(run)
            | ThreadRunCancelling(run)
            | ThreadRunCancelled(run)
            | ThreadRunExpired(run) => Some(run),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistants::runs::RunStatus;
    use serde_json::json;

    fn run(status: &str) -> serde_json::Value {
        json!({
            "id": "run_123",
            "object": "thread.run",
            "created_at": 1710330640,
            "assistant_id": "asst_123",
            "thread_id": "thread_123",
            "status": status,
            "model": "gpt-4o",
            "instructions": "",
            "tools": [],
            "parallel_tool_calls": true
        })
    }

    #[test]
    fn every_run_event_carries_a_run() {
        for status in [
            "created",
            "queued",
            "in_progress",
            "requires_action",
            "completed",
            "incomplete",
            "failed",
            "cancelling",
            "cancelled",
            "expired",
        ] {
            let run_status = if status == "created" { "queued" } else { status };
            let event: AssistantStreamEvent = serde_json::from_value(json!({
                "event": format!("thread.run.{status}"),
                "data": run(run_status)
            }))
            .unwrap();
            let run = event.run().unwrap();
            assert_eq!(serde_json::to_value(run.status).unwrap(), json!(run_status));
        }
    }

    #[test]
    fn raw_parts() {
        let event = AssistantStreamEvent::from_parts("done", "[DONE]").unwrap();
        assert_eq!(event, AssistantStreamEvent::Done("[DONE]".to_string()));

        let event = AssistantStreamEvent::from_parts(
            "thread.run.completed",
            &run("completed").to_string(),
        )
        .unwrap();
        assert_eq!(event.run().unwrap().status, RunStatus::Completed);

        let event = AssistantStreamEvent::from_parts(
            "thread.message.delta",
            r#"{"id":"msg_123","object":"thread.message.delta","delta":{"content":[{"index":0,"type":"text","text":{"value":"Hi"}}]}}"#,
        )
        .unwrap();
        assert!(matches!(event, AssistantStreamEvent::ThreadMessageDelta(_)));
    }

    #[test]
    fn tagged_payloads_decode_from_raw_parts() {
        let event = AssistantStreamEvent::from_parts(
            "thread.message.completed",
            &json!({
                "id": "msg_123",
                "object": "thread.message",
                "created_at": 1710330641,
                "thread_id": "thread_123",
                "role": "assistant",
                "content": [{ "type": "text", "text": { "value": "Hi", "annotations": [] } }],
                "assistant_id": "asst_123",
                "run_id": "run_123",
                "attachments": [],
                "metadata": {}
            })
            .to_string(),
        )
        .unwrap();
        let AssistantStreamEvent::ThreadMessageCompleted(message) = event else {
            panic!("expected a completed message");
        };
        assert_eq!(message.text(), "Hi");

        let event = AssistantStreamEvent::from_parts(
            "thread.run.step.completed",
            &json!({
                "id": "step_123",
                "object": "thread.run.step",
                "created_at": 1710330641,
                "run_id": "run_123",
                "assistant_id": "asst_123",
                "thread_id": "thread_123",
                "type": "message_creation",
                "status": "completed",
                "step_details": {
                    "type": "message_creation",
                    "message_creation": { "message_id": "msg_123" }
                }
            })
            .to_string(),
        )
        .unwrap();
        assert!(matches!(event, AssistantStreamEvent::ThreadRunStepCompleted(_)));

        let event = AssistantStreamEvent::from_parts(
            "thread.run.requires_action",
            &json!({
                "id": "run_123",
                "object": "thread.run",
                "created_at": 1710330640,
                "assistant_id": "asst_123",
                "thread_id": "thread_123",
                "status": "requires_action",
                "required_action": {
                    "type": "submit_tool_outputs",
                    "submit_tool_outputs": {
                        "tool_calls": [{
                            "id": "call_1",
                            "type": "function",
                            "function": { "name": "get_weather", "arguments": "{}" }
                        }]
                    }
                },
                "model": "gpt-4o",
                "instructions": "",
                "tools": [],
                "parallel_tool_calls": true
            })
            .to_string(),
        )
        .unwrap();
        let run = event.run().unwrap();
        assert_eq!(run.required_action.as_ref().unwrap().tool_calls()[0].id, "call_1");
    }

    #[test]
    fn unknown_event_is_rejected() {
        assert!(AssistantStreamEvent::from_parts("thread.unknown", "{}").is_err());
    }

    #[test]
    fn mismatched_payload_is_rejected() {
        assert!(serde_json::from_value::<AssistantStreamEvent>(json!({
            "event": "thread.run.created",
            "data": { "id": "thread_123", "object": "thread", "created_at": 1710330640 }
        }))
        .is_err());
    }
}
