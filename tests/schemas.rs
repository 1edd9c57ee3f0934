#![recursion_limit = "512"]

use std::collections::BTreeSet;

use openai_api::schema;
use serde_json::{json, Value};

fn is_vacant(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        _ => false,
    }
}

/// Every non-vacant part of `original` must survive in `normalized`.
fn covers(original: &Value, normalized: &Value, path: &str) -> Result<(), String> {
    match (original, normalized) {
        (Value::Object(fields), Value::Object(kept)) => {
            for (key, value) in fields {
                if is_vacant(value) {
                    continue;
                }
                let path = format!("{path}.{key}");
                match kept.get(key) {
                    Some(other) => covers(value, other, &path)?,
                    None => return Err(format!("{path} was dropped")),
                }
            }
            Ok(())
        }
        (Value::Array(items), Value::Array(kept)) => {
            if items.len() != kept.len() {
                return Err(format!("{path}: {} items became {}", items.len(), kept.len()));
            }
            for (index, (item, other)) in items.iter().zip(kept).enumerate() {
                covers(item, other, &format!("{path}[{index}]"))?;
            }
            Ok(())
        }
        (Value::Number(a), Value::Number(b)) if a.as_f64() == b.as_f64() => Ok(()),
        (a, b) if a == b => Ok(()),
        (a, b) => Err(format!("{path}: {a} became {b}")),
    }
}

fn model() -> Value {
    json!({
        "id": "gpt-4o-mini",
        "object": "model",
        "created": 1721172741,
        "owned_by": "system"
    })
}

fn chat_completion() -> Value {
    json!({
        "id": "chatcmpl-B9MHDbslfkBeAs8l4bebGdFOJ6PeG",
        "object": "chat.completion",
        "created": 1741570283,
        "model": "gpt-4o-2024-08-06",
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": "The image shows a wooden boardwalk extending through a lush green marshland.",
                "refusal": null,
                "annotations": []
            },
            "logprobs": null,
            "finish_reason": "stop"
        }],
        "usage": {
            "prompt_tokens": 1117,
            "completion_tokens": 46,
            "total_tokens": 1163,
            "prompt_tokens_details": { "cached_tokens": 0, "audio_tokens": 0 },
            "completion_tokens_details": {
                "reasoning_tokens": 0,
                "audio_tokens": 0,
                "accepted_prediction_tokens": 0,
                "rejected_prediction_tokens": 0
            }
        },
        "service_tier": "default",
        "system_fingerprint": "fp_fc9f1d7035"
    })
}

fn file() -> Value {
    json!({
        "id": "file-abc123",
        "object": "file",
        "bytes": 120000,
        "created_at": 1677610602,
        "expires_at": 1680202602,
        "filename": "salesOverview.pdf",
        "purpose": "assistants",
        "status": "processed"
    })
}

fn batch() -> Value {
    json!({
        "id": "batch_abc123",
        "object": "batch",
        "endpoint": "/v1/completions",
        "errors": null,
        "input_file_id": "file-abc123",
        "completion_window": "24h",
        "status": "completed",
        "output_file_id": "file-cvaTdG",
        "error_file_id": "file-HOWS94",
        "created_at": 1711471533,
        "in_progress_at": 1711471538,
        "expires_at": 1711557933,
        "finalizing_at": 1711493133,
        "completed_at": 1711493163,
        "failed_at": null,
        "expired_at": null,
        "cancelling_at": null,
        "cancelled_at": null,
        "request_counts": { "total": 100, "completed": 95, "failed": 5 },
        "metadata": { "customer_id": "user_123456789", "batch_description": "Nightly eval job" }
    })
}

fn fine_tuning_job() -> Value {
    json!({
        "object": "fine_tuning.job",
        "id": "ftjob-abc123",
        "model": "davinci-002",
        "created_at": 1692661014,
        "finished_at": 1692661190,
        "fine_tuned_model": "ft:davinci-002:my-org:custom_suffix:7q8mpxmy",
        "organization_id": "org-123",
        "result_files": ["file-abc123"],
        "status": "succeeded",
        "validation_file": null,
        "training_file": "file-abc123",
        "hyperparameters": { "n_epochs": 4, "batch_size": 1, "learning_rate_multiplier": 1.0 },
        "trained_tokens": 5768,
        "integrations": [],
        "seed": 0,
        "estimated_finish": 0,
        "method": {
            "type": "supervised",
            "supervised": {
                "hyperparameters": { "n_epochs": 4, "batch_size": 1, "learning_rate_multiplier": 1.0 }
            }
        },
        "metadata": { "key": "value" }
    })
}

fn fine_tuning_event() -> Value {
    json!({
        "object": "fine_tuning.job.event",
        "id": "ftevent-abc123",
        "created_at": 1677610602,
        "level": "info",
        "message": "Created fine-tuning job",
        "data": {},
        "type": "message"
    })
}

fn checkpoint() -> Value {
    json!({
        "object": "fine_tuning.job.checkpoint",
        "id": "ftckpt_qtZ5Gyk4BLq1SfLFWp3RtO3P",
        "created_at": 1712211699,
        "fine_tuned_model_checkpoint": "ft:gpt-4o-mini-2024-07-18:my-org:custom_suffix:9ABel2dg:ckpt-step-88",
        "fine_tuning_job_id": "ftjob-fpbNQ3H1GrMehXRf8cO97xTN",
        "metrics": {
            "step": 88,
            "train_loss": 0.478,
            "train_mean_token_accuracy": 0.924,
            "valid_loss": 10.112,
            "valid_mean_token_accuracy": 0.145,
            "full_valid_loss": 0.567,
            "full_valid_mean_token_accuracy": 0.944
        },
        "step_number": 88
    })
}

fn checkpoint_permission() -> Value {
    json!({
        "object": "checkpoint.permission",
        "id": "cp_zc4Q7MP6XxulcVzj4MZdwsAB",
        "created_at": 1721764867,
        "project_id": "proj_abGMw1llN8IrBb6SvvY5A1iH"
    })
}

fn string_check_grader() -> Value {
    json!({
        "type": "string_check",
        "name": "Example string check grader",
        "input": "{{sample.output_text}}",
        "reference": "{{item.label}}",
        "operation": "eq"
    })
}

fn assistant() -> Value {
    json!({
        "id": "asst_abc123",
        "object": "assistant",
        "created_at": 1698984975,
        "name": "Math Tutor",
        "description": null,
        "model": "gpt-4o",
        "instructions": "You are a personal math tutor. When asked a question, write and run Python code to answer the question.",
        "tools": [{ "type": "code_interpreter" }],
        "tool_resources": { "code_interpreter": { "file_ids": ["file-abc123"] } },
        "metadata": {},
        "top_p": 1.0,
        "temperature": 1.0,
        "response_format": "auto"
    })
}

fn thread() -> Value {
    json!({
        "id": "thread_abc123",
        "object": "thread",
        "created_at": 1699012949,
        "metadata": {},
        "tool_resources": {}
    })
}

fn message() -> Value {
    json!({
        "id": "msg_abc123",
        "object": "thread.message",
        "created_at": 1713226573,
        "assistant_id": null,
        "thread_id": "thread_abc123",
        "run_id": null,
        "role": "user",
        "content": [{
            "type": "text",
            "text": {
                "value": "How does AI work? Explain it in simple terms.",
                "annotations": []
            }
        }],
        "attachments": [],
        "metadata": {}
    })
}

fn run() -> Value {
    json!({
        "id": "run_abc123",
        "object": "thread.run",
        "created_at": 1699063290,
        "assistant_id": "asst_abc123",
        "thread_id": "thread_abc123",
        "status": "completed",
        "started_at": 1699063290,
        "expires_at": null,
        "cancelled_at": null,
        "failed_at": null,
        "completed_at": 1699063291,
        "last_error": null,
        "model": "gpt-4o",
        "instructions": "You are a helpful assistant.",
        "incomplete_details": null,
        "tools": [{ "type": "code_interpreter" }],
        "tool_resources": {},
        "metadata": {},
        "usage": { "prompt_tokens": 123, "completion_tokens": 456, "total_tokens": 579 },
        "temperature": 1.0,
        "top_p": 1.0,
        "max_prompt_tokens": 1000,
        "max_completion_tokens": 1000,
        "truncation_strategy": { "type": "auto", "last_messages": null },
        "response_format": "auto",
        "tool_choice": "auto",
        "parallel_tool_calls": true
    })
}

fn run_step() -> Value {
    json!({
        "id": "step_abc123",
        "object": "thread.run.step",
        "created_at": 1699063291,
        "run_id": "run_abc123",
        "assistant_id": "asst_abc123",
        "thread_id": "thread_abc123",
        "type": "message_creation",
        "status": "completed",
        "cancelled_at": null,
        "completed_at": 1699063291,
        "expired_at": null,
        "failed_at": null,
        "last_error": null,
        "step_details": {
            "type": "message_creation",
            "message_creation": { "message_id": "msg_abc123" }
        },
        "usage": { "prompt_tokens": 123, "completion_tokens": 456, "total_tokens": 579 }
    })
}

fn file_search_step() -> Value {
    json!({
        "id": "step_def456",
        "object": "thread.run.step",
        "created_at": 1699063292,
        "run_id": "run_abc123",
        "assistant_id": "asst_abc123",
        "thread_id": "thread_abc123",
        "type": "tool_calls",
        "status": "completed",
        "completed_at": 1699063293,
        "step_details": {
            "type": "tool_calls",
            "tool_calls": [{
                "id": "call_file_search",
                "type": "file_search",
                "file_search": {
                    "ranking_options": { "ranker": "default_2024_08_21", "score_threshold": 0.0 },
                    "results": [{
                        "file_id": "file-faq",
                        "file_name": "faq.md",
                        "score": 0.75,
                        "content": [{ "type": "text", "text": "Returns are accepted within 30 days." }]
                    }]
                }
            }]
        }
    })
}

fn vector_store() -> Value {
    json!({
        "id": "vs_abc123",
        "object": "vector_store",
        "created_at": 1699061776,
        "name": "Support FAQ",
        "usage_bytes": 139920,
        "file_counts": { "in_progress": 0, "completed": 3, "failed": 0, "cancelled": 0, "total": 3 },
        "status": "completed",
        "expires_after": { "anchor": "last_active_at", "days": 7 },
        "expires_at": 1699666576,
        "last_active_at": 1699061776,
        "metadata": {}
    })
}

fn vector_store_file() -> Value {
    json!({
        "id": "file-abc123",
        "object": "vector_store.file",
        "usage_bytes": 1234,
        "created_at": 1698107661,
        "vector_store_id": "vs_abc123",
        "status": "completed",
        "last_error": null,
        "chunking_strategy": {
            "type": "static",
            "static": { "max_chunk_size_tokens": 800, "chunk_overlap_tokens": 400 }
        },
        "attributes": { "author": "John Doe", "year": 2023, "public": true }
    })
}

fn response() -> Value {
    json!({
        "id": "resp_67ccd3a9da748190baa7f1570fe91ac604becb25c45c1d41",
        "object": "response",
        "created_at": 1741476777,
        "status": "completed",
        "error": null,
        "incomplete_details": null,
        "instructions": null,
        "max_output_tokens": null,
        "model": "gpt-4o-2024-08-06",
        "output": [{
            "type": "message",
            "id": "msg_67ccd3acc8d48190a77525dc6de64b4104becb25c45c1d41",
            "status": "completed",
            "role": "assistant",
            "content": [{
                "type": "output_text",
                "text": "The image depicts a scenic landscape with a wooden boardwalk.",
                "annotations": []
            }]
        }],
        "parallel_tool_calls": true,
        "previous_response_id": null,
        "reasoning": { "effort": null, "summary": null },
        "store": true,
        "temperature": 1.0,
        "text": { "format": { "type": "text" } },
        "tool_choice": "auto",
        "tools": [],
        "top_p": 1.0,
        "truncation": "disabled",
        "usage": {
            "input_tokens": 328,
            "input_tokens_details": { "cached_tokens": 0 },
            "output_tokens": 52,
            "output_tokens_details": { "reasoning_tokens": 0 },
            "total_tokens": 380
        },
        "user": null,
        "metadata": {}
    })
}

fn eval() -> Value {
    json!({
        "object": "eval",
        "id": "eval_67abd54d9b0081909a86353f6fb9317a",
        "data_source_config": {
            "type": "custom",
            "schema": {
                "type": "object",
                "properties": {
                    "item": {
                        "type": "object",
                        "properties": {
                            "input": { "type": "string" },
                            "ground_truth": { "type": "string" }
                        },
                        "required": ["input", "ground_truth"]
                    }
                },
                "required": ["item"]
            }
        },
        "testing_criteria": [{
            "name": "String check",
            "type": "string_check",
            "input": "{{item.input}}",
            "reference": "{{item.ground_truth}}",
            "operation": "eq"
        }],
        "name": "External Data Eval",
        "created_at": 1739314509,
        "metadata": {}
    })
}

fn eval_run() -> Value {
    json!({
        "object": "eval.run",
        "id": "evalrun_67e57965b480819094274e3a32235e4c",
        "eval_id": "eval_67e579652b548190aaa83ada4b125f47",
        "report_url": "https://platform.openai.com/evaluation/evals/eval_67e579652b548190aaa83ada4b125f47?run_id=evalrun_67e57965b480819094274e3a32235e4c",
        "status": "completed",
        "model": "gpt-4o-mini",
        "name": "gpt-4o-mini",
        "created_at": 1743092069,
        "result_counts": { "total": 1, "errored": 0, "failed": 0, "passed": 1 },
        "per_model_usage": [{
            "model_name": "gpt-4o-mini",
            "invocation_count": 1,
            "prompt_tokens": 563,
            "completion_tokens": 2,
            "total_tokens": 565,
            "cached_tokens": 0
        }],
        "per_testing_criteria_results": [{
            "testing_criteria": "Push Notification Summary Grader-1808cd0b-eeec-4e0b-a519-337e79f4f5d1",
            "passed": 1,
            "failed": 0
        }],
        "data_source": {
            "type": "completions",
            "source": {
                "type": "file_content",
                "content": [{ "item": { "notifications": "\n- New message from Sarah: \"Can you call me later?\"" } }]
            },
            "input_messages": {
                "type": "template",
                "template": [
                    {
                        "type": "message",
                        "role": "developer",
                        "content": { "type": "input_text", "text": "You are a helpful assistant that summarizes push notifications." }
                    },
                    {
                        "type": "message",
                        "role": "user",
                        "content": { "type": "input_text", "text": "<push_notifications>{{item.notifications}}</push_notifications>" }
                    }
                ]
            },
            "model": "gpt-4o-mini",
            "sampling_params": { "seed": 42, "temperature": 1.0, "top_p": 1.0, "max_completion_tokens": 2048 }
        },
        "error": null,
        "metadata": {}
    })
}

fn eval_output_item() -> Value {
    json!({
        "object": "eval.run.output_item",
        "id": "outputitem_67abd55eb6548190bb580745d5644a33",
        "run_id": "evalrun_67abd54d60ec8190832b46859da808f7",
        "eval_id": "eval_67abd54d9b0081909a86353f6fb9317a",
        "created_at": 1739314509,
        "status": "pass",
        "datasource_item_id": 137,
        "datasource_item": {
            "grader_notes": "To grade essays, I only check for style, content, and grammar.",
            "writer": "I am a student who is trying to write the best essay."
        },
        "results": [{
            "name": "String Check Grader",
            "type": "string-check-grader",
            "score": 1.0,
            "passed": true
        }],
        "sample": {
            "input": [
                { "role": "system", "content": "You are an evaluator bot..." },
                { "role": "user", "content": "You are assessing..." }
            ],
            "output": [{ "role": "assistant", "content": "The rubric is not clear nor concise." }],
            "finish_reason": "stop",
            "model": "gpt-4o-2024-08-06",
            "usage": { "total_tokens": 521, "completion_tokens": 2, "prompt_tokens": 519, "cached_tokens": 0 },
            "error": null,
            "temperature": 1.0,
            "max_completion_tokens": 2048,
            "top_p": 1.0,
            "seed": 42
        }
    })
}

fn container() -> Value {
    json!({
        "id": "cntr_682e30645a488191b6363a0cbefc0f0a025ec61b66250591",
        "object": "container",
        "created_at": 1747857508,
        "status": "running",
        "expires_after": { "anchor": "last_active_at", "minutes": 20 },
        "last_active_at": 1747857508,
        "name": "My Container"
    })
}

fn container_file() -> Value {
    json!({
        "id": "cfile_682e0e8a43c88191a7978f477a09bdf5",
        "object": "container.file",
        "created_at": 1747848842,
        "bytes": 880,
        "container_id": "cntr_682e0e7318108198aa783fd921ff305e08e78805b9fdbb04",
        "path": "/mnt/data/88e12fa445d32636f190a0b33daed6cb-tsconfig.json",
        "source": "user"
    })
}

fn audit_log() -> Value {
    json!({
        "id": "audit_log-xxx_yyyymmdd",
        "type": "project.archived",
        "effective_at": 1722461446,
        "actor": {
            "type": "api_key",
            "api_key": {
                "type": "user",
                "id": "key_xxxx",
                "user": { "id": "user-xxx", "email": "user@example.com" }
            }
        },
        "project.archived": { "id": "proj_abc" }
    })
}

fn admin_api_key() -> Value {
    json!({
        "object": "organization.admin_api_key",
        "id": "key_abc",
        "name": "Main Admin Key",
        "redacted_value": "sk-admin...def",
        "created_at": 1711471533,
        "last_used_at": 1711471534,
        "owner": {
            "type": "service_account",
            "object": "organization.service_account",
            "id": "sa_456",
            "name": "My Service Account",
            "created_at": 1711471533,
            "role": "member"
        }
    })
}

fn certificate() -> Value {
    json!({
        "object": "certificate",
        "id": "cert_abc",
        "name": "My Certificate",
        "created_at": 1234567,
        "certificate_details": {
            "valid_at": 1234567,
            "expires_at": 12345678,
            "content": "-----BEGIN CERTIFICATE-----MIIDeT...-----END CERTIFICATE-----"
        }
    })
}

fn invite() -> Value {
    json!({
        "object": "organization.invite",
        "id": "invite-abc",
        "email": "user@example.com",
        "role": "owner",
        "status": "accepted",
        "invited_at": 1711471533,
        "expires_at": 1711471533,
        "accepted_at": 1711471533,
        "projects": [{ "id": "project-xyz", "role": "member" }]
    })
}

fn user() -> Value {
    json!({
        "object": "organization.user",
        "id": "user_abc",
        "name": "First Last",
        "email": "user@example.com",
        "role": "owner",
        "added_at": 1711471533
    })
}

fn project() -> Value {
    json!({
        "id": "proj_abc",
        "object": "organization.project",
        "name": "Project example",
        "created_at": 1711471533,
        "archived_at": null,
        "status": "active"
    })
}

fn project_user() -> Value {
    json!({
        "object": "organization.project.user",
        "id": "user_abc",
        "name": "First Last",
        "email": "user@example.com",
        "role": "owner",
        "added_at": 1711471533
    })
}

fn project_api_key() -> Value {
    json!({
        "object": "organization.project.api_key",
        "redacted_value": "sk-abc...def",
        "name": "My API Key",
        "created_at": 1711471533,
        "last_used_at": 1711471534,
        "id": "key_abc",
        "owner": { "type": "user", "user": project_user() }
    })
}

fn project_rate_limit() -> Value {
    json!({
        "object": "project.rate_limit",
        "id": "rl_ada",
        "model": "ada",
        "max_requests_per_1_minute": 600,
        "max_tokens_per_1_minute": 150000,
        "max_images_per_1_minute": 10
    })
}

fn service_account() -> Value {
    json!({
        "object": "organization.project.service_account",
        "id": "svc_acct_abc",
        "name": "Service Account",
        "role": "owner",
        "created_at": 1711471533
    })
}

fn list(data: Vec<Value>) -> Value {
    let first = data.first().and_then(|item| item.get("id")).cloned();
    let last = data.last().and_then(|item| item.get("id")).cloned();
    json!({
        "object": "list",
        "data": data,
        "first_id": first,
        "last_id": last,
        "has_more": false
    })
}

fn deleted(id: &str, object: &str) -> Value {
    json!({ "id": id, "object": object, "deleted": true })
}

fn fixtures() -> Vec<(&'static str, Value)> {
    vec![
        (
            "ErrorResponse",
            json!({
                "error": {
                    "message": "Incorrect API key provided: sk-abc. You can find your API key at https://platform.openai.com/account/api-keys.",
                    "type": "invalid_request_error",
                    "param": null,
                    "code": "invalid_api_key"
                }
            }),
        ),
        // Models
        ("Model", model()),
        ("ListModelsResponse", list(vec![model(), json!({
            "id": "ft:gpt-4o-mini:acemeco:suffix:abc123",
            "object": "model",
            "created": 1686935002,
            "owned_by": "acemeco"
        })])),
        ("DeleteModelResponse", deleted("ft:gpt-4o-mini:acemeco:suffix:abc123", "model")),
        // Chat
        (
            "CreateChatCompletionRequest",
            json!({
                "model": "gpt-4.1",
                "messages": [
                    { "role": "developer", "content": [{ "type": "text", "text": "You are a helpful assistant." }] },
                    {
                        "role": "user",
                        "content": [
                            { "type": "text", "text": "What is the weather like where this photo was taken?" },
                            { "type": "image_url", "image_url": { "url": "https://example.com/boardwalk.jpg", "detail": "low" } }
                        ]
                    },
                    {
                        "role": "assistant",
                        "content": null,
                        "tool_calls": [{
                            "id": "call_abc123",
                            "type": "function",
                            "function": { "name": "get_current_weather", "arguments": "{\"location\": \"Boston, MA\"}" }
                        }]
                    },
                    { "role": "tool", "tool_call_id": "call_abc123", "content": "{\"temperature\": 22}" }
                ],
                "tools": [{
                    "type": "function",
                    "function": {
                        "name": "get_current_weather",
                        "description": "Get the current weather in a given location",
                        "parameters": {
                            "type": "object",
                            "properties": {
                                "location": { "type": "string", "description": "The city and state, e.g. San Francisco, CA" },
                                "unit": { "type": "string", "enum": ["celsius", "fahrenheit"] }
                            },
                            "required": ["location"]
                        }
                    }
                }],
                "tool_choice": "auto",
                "temperature": 0.5,
                "max_completion_tokens": 300,
                "stream": true,
                "stream_options": { "include_usage": true },
                "logprobs": true,
                "top_logprobs": 2,
                "store": true,
                "metadata": { "topic": "weather" },
                "response_format": { "type": "text" }
            }),
        ),
        ("CreateChatCompletionResponse", chat_completion()),
        (
            "CreateChatCompletionStreamResponse",
            json!({
                "id": "chatcmpl-123",
                "object": "chat.completion.chunk",
                "created": 1694268190,
                "model": "gpt-4o-mini",
                "system_fingerprint": "fp_44709d6fcb",
                "choices": [{
                    "index": 0,
                    "delta": { "role": "assistant", "content": "" },
                    "logprobs": null,
                    "finish_reason": null
                }]
            }),
        ),
        ("ChatCompletionRequestMessage", json!({ "role": "user", "content": "Hello!", "name": "alice" })),
        (
            "ChatCompletionTool",
            json!({
                "type": "function",
                "function": {
                    "name": "get_delivery_date",
                    "description": "Get the delivery date for a customer's order.",
                    "parameters": {
                        "type": "object",
                        "properties": { "order_id": { "type": "string" } },
                        "required": ["order_id"],
                        "additionalProperties": false
                    },
                    "strict": true
                }
            }),
        ),
        ("ChatCompletionToolChoiceOption", json!({ "type": "function", "function": { "name": "my_function" } })),
        ("ChatCompletionList", list(vec![chat_completion()])),
        ("UpdateChatCompletionRequest", json!({ "metadata": { "foo": "bar" } })),
        ("ChatCompletionDeleted", deleted("chatcmpl-AyPNinnUqUDYo9SAdA52NobMflmj2", "chat.completion.deleted")),
        (
            "ChatCompletionMessageList",
            list(vec![json!({
                "id": "chatcmpl-AyPNinnUqUDYo9SAdA52NobMflmj2-0",
                "role": "user",
                "content": "write a haiku about ai"
            })]),
        ),
        // Completions, embeddings, moderations
        (
            "CreateCompletionRequest",
            json!({
                "model": "gpt-3.5-turbo-instruct",
                "prompt": "Say this is a test",
                "max_tokens": 7,
                "temperature": 0.0,
                "stop": ["\n"]
            }),
        ),
        (
            "CreateCompletionResponse",
            json!({
                "id": "cmpl-uqkvlQyYK7bGYrRHQ0eXlWi7",
                "object": "text_completion",
                "created": 1589478378,
                "model": "gpt-3.5-turbo-instruct",
                "system_fingerprint": "fp_44709d6fcb",
                "choices": [{
                    "text": "\n\nThis is indeed a test",
                    "index": 0,
                    "logprobs": null,
                    "finish_reason": "length"
                }],
                "usage": { "prompt_tokens": 5, "completion_tokens": 7, "total_tokens": 12 }
            }),
        ),
        (
            "CreateEmbeddingRequest",
            json!({
                "input": "The food was delicious and the waiter...",
                "model": "text-embedding-3-small",
                "encoding_format": "float",
                "dimensions": 256
            }),
        ),
        (
            "CreateEmbeddingResponse",
            json!({
                "object": "list",
                "data": [{ "object": "embedding", "embedding": [0.5, -0.25, 0.125, -0.0625], "index": 0 }],
                "model": "text-embedding-3-small",
                "usage": { "prompt_tokens": 8, "total_tokens": 8 }
            }),
        ),
        (
            "CreateModerationRequest",
            json!({
                "model": "omni-moderation-latest",
                "input": [
                    { "type": "text", "text": "...text to classify goes here..." },
                    { "type": "image_url", "image_url": { "url": "https://example.com/image.png" } }
                ]
            }),
        ),
        (
            "CreateModerationResponse",
            json!({
                "id": "modr-0d9740456c391e43c445bf0f010940c7",
                "model": "omni-moderation-latest",
                "results": [{
                    "flagged": true,
                    "categories": {
                        "harassment": true,
                        "harassment/threatening": true,
                        "sexual": false,
                        "hate": false,
                        "hate/threatening": false,
                        "illicit": false,
                        "illicit/violent": false,
                        "self-harm/intent": false,
                        "self-harm/instructions": false,
                        "self-harm": false,
                        "sexual/minors": false,
                        "violence": true,
                        "violence/graphic": true
                    },
                    "category_scores": {
                        "harassment": 0.8189693396524255,
                        "harassment/threatening": 0.804985420696006,
                        "sexual": 1.5585841112032175e-05,
                        "hate": 0.007988274841286969,
                        "hate/threatening": 0.004326890231156507,
                        "illicit": 0.00003,
                        "illicit/violent": 0.00002,
                        "self-harm/intent": 0.0000075,
                        "self-harm/instructions": 0.000002,
                        "self-harm": 0.000011,
                        "sexual/minors": 0.0000012,
                        "violence": 0.9223177433026364,
                        "violence/graphic": 0.8269751591663264
                    },
                    "category_applied_input_types": {
                        "harassment": ["text"],
                        "violence": ["text", "image"],
                        "violence/graphic": ["text", "image"]
                    }
                }]
            }),
        ),
        // Images
        (
            "CreateImageRequest",
            json!({
                "model": "gpt-image-1",
                "prompt": "A cute baby sea otter",
                "n": 1,
                "size": "1024x1024",
                "quality": "high",
                "background": "transparent",
                "moderation": "low",
                "output_format": "png"
            }),
        ),
        (
            "CreateImageEditRequest",
            json!({
                "model": "gpt-image-1",
                "prompt": "Create a lovely gift basket with these four items in it",
                "n": 1,
                "size": "1024x1024",
                "quality": "high"
            }),
        ),
        ("CreateImageVariationRequest", json!({ "model": "dall-e-2", "n": 2, "size": "1024x1024", "response_format": "url" })),
        (
            "ImagesResponse",
            json!({
                "created": 1713833628,
                "data": [{ "b64_json": "iVBORw0KGgo..." }],
                "usage": {
                    "total_tokens": 100,
                    "input_tokens": 50,
                    "output_tokens": 50,
                    "input_tokens_details": { "text_tokens": 10, "image_tokens": 40 }
                }
            }),
        ),
        // Audio
        (
            "CreateSpeechRequest",
            json!({
                "model": "gpt-4o-mini-tts",
                "input": "The quick brown fox jumped over the lazy dog.",
                "voice": "alloy",
                "instructions": "Speak in a cheerful and positive tone.",
                "response_format": "mp3",
                "speed": 1.0
            }),
        ),
        (
            "CreateTranscriptionRequest",
            json!({
                "model": "whisper-1",
                "language": "en",
                "response_format": "verbose_json",
                "timestamp_granularities": ["word", "segment"],
                "temperature": 0.0
            }),
        ),
        (
            "CreateTranscriptionResponse",
            json!({
                "language": "english",
                "duration": 8.470000267028809,
                "text": "The beach was a popular spot on a hot summer day.",
                "words": [
                    { "word": "The", "start": 0.0, "end": 0.23999999463558197 },
                    { "word": "beach", "start": 0.23999999463558197, "end": 0.5 }
                ],
                "segments": [{
                    "id": 0,
                    "seek": 0,
                    "start": 0.0,
                    "end": 3.319999933242798,
                    "text": " The beach was a popular spot on a hot summer day.",
                    "tokens": [50364, 440, 7534, 390, 257, 3743, 4008, 322, 257, 2368, 4266, 786, 13],
                    "temperature": 0.0,
                    "avg_logprob": -0.2860786020755768,
                    "compression_ratio": 1.2363636493682861,
                    "no_speech_prob": 0.00985979475080967
                }]
            }),
        ),
        ("CreateTranslationRequest", json!({ "model": "whisper-1", "prompt": "Meeting notes", "response_format": "json" })),
        (
            "CreateTranslationResponse",
            json!({ "text": "Hello, my name is Wolfgang and I come from Germany. Where are you heading today?" }),
        ),
        // Files and uploads
        ("OpenAIFile", file()),
        ("ListFilesResponse", list(vec![file()])),
        ("CreateFileRequest", json!({ "purpose": "fine-tune" })),
        ("DeleteFileResponse", deleted("file-abc123", "file")),
        (
            "CreateUploadRequest",
            json!({
                "purpose": "fine-tune",
                "filename": "training_examples.jsonl",
                "bytes": 2147483648u64,
                "mime_type": "text/jsonl"
            }),
        ),
        ("AddUploadPartRequest", json!({})),
        ("CompleteUploadRequest", json!({ "part_ids": ["part_def456", "part_ghi789"], "md5": "d41d8cd98f00b204e9800998ecf8427e" })),
        (
            "Upload",
            json!({
                "id": "upload_abc123",
                "object": "upload",
                "bytes": 2147483648u64,
                "created_at": 1719184911,
                "filename": "training_examples.jsonl",
                "purpose": "fine-tune",
                "status": "completed",
                "expires_at": 1719127296,
                "file": {
                    "id": "file-xyz321",
                    "object": "file",
                    "bytes": 2147483648u64,
                    "created_at": 1719186911,
                    "filename": "training_examples.jsonl",
                    "purpose": "fine-tune"
                }
            }),
        ),
        (
            "UploadPart",
            json!({ "id": "part_def456", "object": "upload.part", "created_at": 1719185911, "upload_id": "upload_abc123" }),
        ),
        // Batches
        (
            "CreateBatchRequest",
            json!({
                "input_file_id": "file-abc123",
                "endpoint": "/v1/chat/completions",
                "completion_window": "24h",
                "metadata": { "customer_id": "user_123456789" }
            }),
        ),
        ("Batch", batch()),
        ("ListBatchesResponse", list(vec![batch()])),
        (
            "BatchRequestInput",
            json!({
                "custom_id": "request-1",
                "method": "POST",
                "url": "/v1/chat/completions",
                "body": {
                    "model": "gpt-4o-mini",
                    "messages": [{ "role": "user", "content": "What is 2+2?" }]
                }
            }),
        ),
        (
            "BatchRequestOutput",
            json!({
                "id": "batch_req_wnaDys",
                "custom_id": "request-2",
                "response": {
                    "status_code": 200,
                    "request_id": "req_c187b3",
                    "body": { "id": "chatcmpl-9758Iw", "object": "chat.completion" }
                },
                "error": null
            }),
        ),
        // Fine-tuning
        (
            "CreateFineTuningJobRequest",
            json!({
                "training_file": "file-abc123",
                "validation_file": "file-def456",
                "model": "gpt-4o-mini",
                "suffix": "custom-model-name",
                "seed": 42,
                "method": { "type": "dpo", "dpo": { "hyperparameters": { "beta": 0.25 } } },
                "integrations": [{
                    "type": "wandb",
                    "wandb": { "project": "my-wandb-project", "name": "ft-run-display-name", "tags": ["first-experiment"] }
                }]
            }),
        ),
        ("FineTuningJob", fine_tuning_job()),
        ("ListPaginatedFineTuningJobsResponse", list(vec![fine_tuning_job()])),
        ("FineTuningJobEvent", fine_tuning_event()),
        ("ListFineTuningJobEventsResponse", list(vec![fine_tuning_event()])),
        ("FineTuningJobCheckpoint", checkpoint()),
        ("ListFineTuningJobCheckpointsResponse", list(vec![checkpoint()])),
        ("FineTuningCheckpointPermission", checkpoint_permission()),
        ("ListFineTuningCheckpointPermissionResponse", list(vec![checkpoint_permission()])),
        ("CreateFineTuningCheckpointPermissionRequest", json!({ "project_ids": ["proj_abGMw1llN8IrBb6SvvY5A1iH"] })),
        (
            "DeleteFineTuningCheckpointPermissionResponse",
            deleted("cp_zc4Q7MP6XxulcVzj4MZdwsAB", "checkpoint.permission"),
        ),
        // Graders
        (
            "RunGraderRequest",
            json!({
                "grader": {
                    "type": "score_model",
                    "name": "Example score model grader",
                    "input": [{
                        "role": "user",
                        "content": "Score how close the reference answer is to the model answer. Score 1.0 if they are the same and 0.0 if they are different. Reference answer: {{item.reference_answer}}. Model answer: {{sample.output_text}}"
                    }],
                    "model": "gpt-4o-2024-08-06",
                    "sampling_params": { "temperature": 1, "top_p": 1, "seed": 42 },
                    "range": [0, 1]
                },
                "item": { "reference_answer": "fuzzy wuzzy was a bear" },
                "model_sample": "fuzzy wuzzy was a bear"
            }),
        ),
        (
            "RunGraderResponse",
            json!({
                "reward": 1.0,
                "metadata": {
                    "name": "Example score model grader",
                    "type": "score_model",
                    "errors": { "formula_parse_error": false, "sample_parse_error": false },
                    "execution_time": 6.0,
                    "scores": {},
                    "token_usage": null,
                    "sampled_model_name": "gpt-4o-2024-08-06"
                },
                "sub_rewards": {},
                "model_grader_token_usage_per_model": {
                    "gpt-4o-2024-08-06": { "prompt_tokens": 190, "completion_tokens": 324, "total_tokens": 514, "cached_tokens": 0 }
                }
            }),
        ),
        ("ValidateGraderRequest", json!({ "grader": string_check_grader() })),
        ("ValidateGraderResponse", json!({ "grader": string_check_grader() })),
        // Assistants
        ("AssistantObject", assistant()),
        ("ListAssistantsResponse", list(vec![assistant()])),
        (
            "CreateAssistantRequest",
            json!({
                "instructions": "You are an HR bot, and you have access to files to answer employee questions about company policies.",
                "name": "HR Helper",
                "tools": [{ "type": "file_search" }],
                "tool_resources": { "file_search": { "vector_store_ids": ["vs_123"] } },
                "model": "gpt-4o"
            }),
        ),
        (
            "ModifyAssistantRequest",
            json!({
                "instructions": "You are an HR bot. Always response with info from either of the files.",
                "tools": [{ "type": "file_search" }],
                "model": "gpt-4o",
                "reasoning_effort": "low"
            }),
        ),
        ("DeleteAssistantResponse", deleted("asst_abc123", "assistant.deleted")),
        (
            "AssistantTool",
            json!({
                "type": "file_search",
                "file_search": {
                    "max_num_results": 20,
                    "ranking_options": { "ranker": "auto", "score_threshold": 0.5 }
                }
            }),
        ),
        // Threads
        ("ThreadObject", thread()),
        (
            "CreateThreadRequest",
            json!({
                "messages": [
                    { "role": "user", "content": "Hello, what is AI?" },
                    { "role": "user", "content": [{ "type": "text", "text": "How does AI work? Explain it in simple terms." }] }
                ],
                "metadata": { "modified": "true" }
            }),
        ),
        ("ModifyThreadRequest", json!({ "metadata": { "modified": "true", "user": "abc123" } })),
        ("DeleteThreadResponse", deleted("thread_abc123", "thread.deleted")),
        (
            "CreateThreadAndRunRequest",
            json!({
                "assistant_id": "asst_abc123",
                "thread": { "messages": [{ "role": "user", "content": "Explain deep learning to a 5 year old." }] },
                "tool_choice": { "type": "file_search" },
                "truncation_strategy": { "type": "last_messages", "last_messages": 10 }
            }),
        ),
        // Messages
        ("MessageObject", message()),
        (
            "MessageDeltaObject",
            json!({
                "id": "msg_123",
                "object": "thread.message.delta",
                "delta": {
                    "content": [{ "index": 0, "type": "text", "text": { "value": "Hello", "annotations": [] } }]
                }
            }),
        ),
        ("ListMessagesResponse", list(vec![message()])),
        (
            "CreateMessageRequest",
            json!({
                "role": "user",
                "content": "How does AI work? Explain it in simple terms.",
                "attachments": [{ "file_id": "file-abc123", "tools": [{ "type": "file_search" }] }]
            }),
        ),
        ("ModifyMessageRequest", json!({ "metadata": { "modified": "true", "user": "abc123" } })),
        ("DeleteMessageResponse", deleted("msg_abc123", "thread.message.deleted")),
        // Runs and run steps
        ("RunObject", run()),
        ("ListRunsResponse", list(vec![run()])),
        (
            "CreateRunRequest",
            json!({
                "assistant_id": "asst_abc123",
                "additional_instructions": "Please address the user as Jane Doe.",
                "additional_messages": [{ "role": "user", "content": "I need to solve 3x + 11 = 14." }],
                "tool_choice": "required",
                "parallel_tool_calls": false
            }),
        ),
        ("ModifyRunRequest", json!({ "metadata": { "user_id": "user_abc123" } })),
        (
            "SubmitToolOutputsRunRequest",
            json!({ "tool_outputs": [{ "tool_call_id": "call_001", "output": "70 degrees and sunny." }] }),
        ),
        ("RunStepObject", run_step()),
        (
            "RunStepDeltaObject",
            json!({
                "id": "step_123",
                "object": "thread.run.step.delta",
                "delta": {
                    "step_details": {
                        "type": "tool_calls",
                        "tool_calls": [{
                            "index": 0,
                            "id": "call_123",
                            "type": "code_interpreter",
                            "code_interpreter": { "input": "print(1 + 1)", "outputs": [] }
                        }]
                    }
                }
            }),
        ),
        ("ListRunStepsResponse", list(vec![run_step(), file_search_step()])),
        (
            "AssistantStreamEvent",
            json!({
                "event": "thread.message.delta",
                "data": {
                    "id": "msg_123",
                    "object": "thread.message.delta",
                    "delta": { "content": [{ "index": 0, "type": "text", "text": { "value": " world" } }] }
                }
            }),
        ),
        // Vector stores
        ("VectorStoreObject", vector_store()),
        ("ListVectorStoresResponse", list(vec![vector_store()])),
        (
            "CreateVectorStoreRequest",
            json!({
                "name": "Support FAQ",
                "file_ids": ["file-abc123"],
                "expires_after": { "anchor": "last_active_at", "days": 7 },
                "chunking_strategy": { "type": "auto" }
            }),
        ),
        ("UpdateVectorStoreRequest", json!({ "name": "Support FAQ", "metadata": { "team": "support" } })),
        ("DeleteVectorStoreResponse", deleted("vs_abc123", "vector_store.deleted")),
        (
            "VectorStoreSearchRequest",
            json!({
                "query": "What is the return policy?",
                "rewrite_query": true,
                "max_num_results": 10,
                "filters": { "type": "eq", "key": "region", "value": "us" },
                "ranking_options": { "ranker": "auto", "score_threshold": 0.25 }
            }),
        ),
        (
            "VectorStoreSearchResultsPage",
            json!({
                "object": "vector_store.search_results.page",
                "search_query": ["What is the return policy?"],
                "data": [{
                    "file_id": "file_123",
                    "filename": "document.pdf",
                    "score": 0.95,
                    "attributes": { "author": "John Doe", "date": "2023-01-01" },
                    "content": [{ "type": "text", "text": "Relevant chunk" }]
                }],
                "has_more": false,
                "next_page": null
            }),
        ),
        ("VectorStoreFileObject", vector_store_file()),
        ("ListVectorStoreFilesResponse", list(vec![vector_store_file()])),
        (
            "CreateVectorStoreFileRequest",
            json!({ "file_id": "file-abc123", "attributes": { "category": "faq" } }),
        ),
        ("UpdateVectorStoreFileAttributesRequest", json!({ "attributes": { "key1": "value1", "score": 2 } })),
        ("DeleteVectorStoreFileResponse", deleted("file-abc123", "vector_store.file.deleted")),
        (
            "VectorStoreFileContentResponse",
            json!({
                "object": "vector_store.file_content.page",
                "data": [{ "type": "text", "text": "Returns are accepted within 30 days." }],
                "has_more": false,
                "next_page": null
            }),
        ),
        ("CreateVectorStoreFileBatchRequest", json!({ "file_ids": ["file-abc123", "file-abc456"] })),
        (
            "VectorStoreFileBatchObject",
            json!({
                "id": "vsfb_abc123",
                "object": "vector_store.file_batch",
                "created_at": 1699061776,
                "vector_store_id": "vs_abc123",
                "status": "in_progress",
                "file_counts": { "in_progress": 1, "completed": 1, "failed": 0, "cancelled": 0, "total": 2 }
            }),
        ),
        // Responses
        (
            "CreateResponse",
            json!({
                "model": "gpt-4.1",
                "instructions": "Answer from the knowledge base.",
                "input": [{
                    "role": "user",
                    "content": [
                        { "type": "input_text", "text": "what is in this image?" },
                        { "type": "input_image", "image_url": "https://example.com/boardwalk.jpg", "detail": "auto" }
                    ]
                }],
                "tools": [{ "type": "file_search", "vector_store_ids": ["vs_1234567890"], "max_num_results": 20 }],
                "tool_choice": { "type": "file_search" },
                "text": {
                    "format": {
                        "type": "json_schema",
                        "name": "answer",
                        "schema": { "type": "object", "properties": { "answer": { "type": "string" } } },
                        "strict": true
                    }
                },
                "reasoning": { "effort": "low", "summary": "auto" },
                "include": ["file_search_call.results"],
                "store": true
            }),
        ),
        ("Response", response()),
        ("ResponseDeleted", deleted("resp_6786a1bec27481909a17d673315b29f6", "response")),
        (
            "ResponseItemList",
            list(vec![json!({
                "id": "msg_abc123",
                "type": "message",
                "role": "user",
                "status": "completed",
                "content": [{ "type": "input_text", "text": "Tell me a three sentence bedtime story about a unicorn." }]
            })]),
        ),
        (
            "ResponseStreamEvent",
            json!({
                "type": "response.output_text.delta",
                "item_id": "msg_123",
                "output_index": 0,
                "content_index": 0,
                "delta": "In",
                "sequence_number": 1
            }),
        ),
        // Realtime
        (
            "RealtimeSessionCreateRequest",
            json!({
                "model": "gpt-4o-realtime-preview",
                "modalities": ["audio", "text"],
                "instructions": "You are a friendly assistant.",
                "voice": "alloy",
                "input_audio_format": "pcm16",
                "output_audio_format": "pcm16",
                "input_audio_transcription": { "model": "whisper-1" },
                "turn_detection": {
                    "type": "server_vad",
                    "threshold": 0.5,
                    "prefix_padding_ms": 300,
                    "silence_duration_ms": 500,
                    "create_response": true
                },
                "tool_choice": "auto",
                "temperature": 0.75,
                "max_response_output_tokens": "inf"
            }),
        ),
        (
            "RealtimeSessionCreateResponse",
            json!({
                "id": "sess_001",
                "object": "realtime.session",
                "model": "gpt-4o-realtime-preview",
                "modalities": ["audio", "text"],
                "instructions": "You are a friendly assistant.",
                "voice": "alloy",
                "input_audio_format": "pcm16",
                "output_audio_format": "pcm16",
                "input_audio_transcription": { "model": "whisper-1" },
                "turn_detection": null,
                "tools": [],
                "tool_choice": "none",
                "temperature": 0.75,
                "max_response_output_tokens": 200,
                "speed": 1.0,
                "client_secret": { "value": "ek_abc123", "expires_at": 1234567890 }
            }),
        ),
        (
            "RealtimeTranscriptionSessionCreateRequest",
            json!({
                "input_audio_format": "pcm16",
                "input_audio_transcription": { "model": "gpt-4o-transcribe", "language": "en" },
                "input_audio_noise_reduction": { "type": "near_field" },
                "include": ["item.input_audio_transcription.logprobs"]
            }),
        ),
        (
            "RealtimeTranscriptionSessionCreateResponse",
            json!({
                "client_secret": { "value": "ek_abc123", "expires_at": 1234567890 },
                "input_audio_format": "pcm16",
                "input_audio_transcription": { "model": "gpt-4o-transcribe", "language": null, "prompt": "" },
                "turn_detection": {
                    "type": "server_vad",
                    "threshold": 0.5,
                    "prefix_padding_ms": 300,
                    "silence_duration_ms": 500
                },
                "input_audio_noise_reduction": { "type": "near_field" },
                "include": null
            }),
        ),
        (
            "RealtimeServerEvent",
            json!({
                "event_id": "event_1920",
                "type": "conversation.item.created",
                "previous_item_id": "msg_002",
                "item": {
                    "id": "msg_003",
                    "type": "message",
                    "status": "completed",
                    "role": "user",
                    "content": [{ "type": "input_audio", "transcript": "hello how are you" }]
                }
            }),
        ),
        (
            "RealtimeClientEvent",
            json!({
                "event_id": "event_345",
                "type": "conversation.item.create",
                "previous_item_id": null,
                "item": {
                    "id": "msg_001",
                    "type": "message",
                    "role": "user",
                    "content": [{ "type": "input_text", "text": "Hello, how are you?" }]
                }
            }),
        ),
        // Evals
        ("Eval", eval()),
        ("EvalList", list(vec![eval()])),
        (
            "CreateEvalRequest",
            json!({
                "name": "Sentiment",
                "data_source_config": { "type": "stored_completions", "metadata": { "usecase": "chatbot" } },
                "testing_criteria": [{
                    "type": "label_model",
                    "name": "Example label grader",
                    "model": "o3-mini",
                    "input": [
                        { "role": "developer", "content": "Classify the sentiment of the following statement as one of positive, neutral, or negative" },
                        { "role": "user", "content": "Statement: {{item.input}}" }
                    ],
                    "passing_labels": ["positive"],
                    "labels": ["positive", "neutral", "negative"]
                }]
            }),
        ),
        ("UpdateEvalRequest", json!({ "name": "Updated Eval", "metadata": { "description": "Updated description" } })),
        ("DeleteEvalResponse", json!({ "object": "eval.deleted", "deleted": true, "eval_id": "eval_abc123" })),
        ("EvalRun", eval_run()),
        ("EvalRunList", list(vec![eval_run()])),
        (
            "CreateEvalRunRequest",
            json!({
                "name": "gpt-4o-mini",
                "data_source": { "type": "jsonl", "source": { "type": "file_id", "id": "file-J7MoX9ToHXp2TutMEeYnwj" } }
            }),
        ),
        ("DeleteEvalRunResponse", json!({ "object": "eval.run.deleted", "deleted": true, "run_id": "evalrun_abc456" })),
        ("EvalRunOutputItem", eval_output_item()),
        ("EvalRunOutputItemList", list(vec![eval_output_item()])),
        // Containers
        ("ContainerResource", container()),
        ("ContainerListResource", list(vec![container()])),
        (
            "CreateContainerBody",
            json!({
                "name": "My Container",
                "file_ids": ["file-abc123"],
                "expires_after": { "anchor": "last_active_at", "minutes": 20 }
            }),
        ),
        ("DeleteContainerResponse", deleted("cntr_682dfebaacac8198bbfe9c2474fb6f4a085685cbe3cb5863", "container.deleted")),
        ("ContainerFileResource", container_file()),
        ("ContainerFileListResource", list(vec![container_file()])),
        ("CreateContainerFileBody", json!({ "file_id": "file-abc123" })),
        ("DeleteContainerFileResponse", deleted("cfile_682e0e8a43c88191a7978f477a09bdf5", "container.file.deleted")),
        // Organization
        ("AuditLog", audit_log()),
        ("ListAuditLogsResponse", list(vec![audit_log()])),
        ("AdminApiKey", admin_api_key()),
        ("ApiKeyList", list(vec![admin_api_key()])),
        ("CreateAdminApiKeyRequest", json!({ "name": "New Admin Key" })),
        ("AdminApiKeyDeleteResponse", deleted("key_abc", "organization.admin_api_key.deleted")),
        ("Certificate", certificate()),
        (
            "ListCertificatesResponse",
            list(vec![json!({
                "object": "organization.certificate",
                "id": "cert_abc",
                "name": "My Example Certificate",
                "active": true,
                "created_at": 1234567,
                "certificate_details": { "valid_at": 12345667, "expires_at": 12345678 }
            })]),
        ),
        (
            "UploadCertificateRequest",
            json!({ "name": "My Example Certificate", "content": "-----BEGIN CERTIFICATE-----MIIDeT...-----END CERTIFICATE-----" }),
        ),
        ("ModifyCertificateRequest", json!({ "name": "Renamed Certificate" })),
        ("ToggleCertificatesRequest", json!({ "certificate_ids": ["cert_abc", "cert_def"] })),
        ("DeleteCertificateResponse", json!({ "object": "certificate.deleted", "id": "cert_abc" })),
        ("Invite", invite()),
        ("InviteListResponse", list(vec![invite()])),
        (
            "InviteRequest",
            json!({
                "email": "anotheruser@example.com",
                "role": "reader",
                "projects": [{ "id": "project-xyz", "role": "member" }, { "id": "project-abc", "role": "owner" }]
            }),
        ),
        ("InviteDeleteResponse", deleted("invite-abc", "organization.invite.deleted")),
        ("User", user()),
        ("UserListResponse", list(vec![user()])),
        ("UserRoleUpdateRequest", json!({ "role": "reader" })),
        ("UserDeleteResponse", deleted("user_abc", "organization.user.deleted")),
        ("Project", project()),
        ("ProjectListResponse", list(vec![project()])),
        ("ProjectCreateRequest", json!({ "name": "Project ABC" })),
        ("ProjectUpdateRequest", json!({ "name": "Project DEF" })),
        ("ProjectApiKey", project_api_key()),
        ("ProjectApiKeyListResponse", list(vec![project_api_key()])),
        ("ProjectApiKeyDeleteResponse", deleted("key_abc", "organization.project.api_key.deleted")),
        ("ProjectRateLimit", project_rate_limit()),
        ("ProjectRateLimitListResponse", list(vec![project_rate_limit()])),
        ("ProjectRateLimitUpdateRequest", json!({ "max_requests_per_1_minute": 500 })),
        ("ProjectServiceAccount", service_account()),
        ("ProjectServiceAccountListResponse", list(vec![service_account()])),
        ("ProjectServiceAccountCreateRequest", json!({ "name": "Production App" })),
        (
            "ProjectServiceAccountCreateResponse",
            json!({
                "object": "organization.project.service_account",
                "id": "svc_acct_abc",
                "name": "Production App",
                "role": "member",
                "created_at": 1711471533,
                "api_key": {
                    "object": "organization.project.service_account.api_key",
                    "value": "sk-abcdefghijklmnop123",
                    "name": "Secret Key",
                    "created_at": 1711471533,
                    "id": "key_abc"
                }
            }),
        ),
        (
            "ProjectServiceAccountDeleteResponse",
            deleted("svc_acct_abc", "organization.project.service_account.deleted"),
        ),
        ("ProjectUser", project_user()),
        ("ProjectUserListResponse", list(vec![project_user()])),
        ("ProjectUserCreateRequest", json!({ "user_id": "user_abc", "role": "member" })),
        ("ProjectUserUpdateRequest", json!({ "role": "owner" })),
        ("ProjectUserDeleteResponse", deleted("user_abc", "organization.project.user.deleted")),
        // Usage
        (
            "UsageResponse",
            json!({
                "object": "page",
                "data": [{
                    "object": "bucket",
                    "start_time": 1730419200,
                    "end_time": 1730505600,
                    "results": [{
                        "object": "organization.usage.completions.result",
                        "input_tokens": 1000,
                        "output_tokens": 500,
                        "input_cached_tokens": 800,
                        "input_audio_tokens": 0,
                        "output_audio_tokens": 0,
                        "num_model_requests": 5,
                        "project_id": null,
                        "user_id": null,
                        "api_key_id": null,
                        "model": null,
                        "batch": null
                    }]
                }],
                "has_more": true,
                "next_page": "page_AAAAAGdGxdEiJdKOAAAAAGcqsYA="
            }),
        ),
    ]
}

#[test]
fn every_schema_has_a_fixture() {
    let fixtures = fixtures();
    let covered: BTreeSet<_> = fixtures.iter().map(|(name, _)| *name).collect();
    assert_eq!(covered.len(), fixtures.len(), "a schema has two fixtures");

    let registered: BTreeSet<_> = schema::names().collect();
    let missing: Vec<_> = registered.difference(&covered).collect();
    let unknown: Vec<_> = covered.difference(&registered).collect();
    assert!(missing.is_empty(), "no fixture for {missing:?}");
    assert!(unknown.is_empty(), "fixtures for unregistered {unknown:?}");
}

#[test]
fn fixtures_survive_normalization() {
    let mut failures = Vec::new();
    for (name, value) in fixtures() {
        if let Err(error) = schema::validate(name, &value) {
            failures.push(format!("{name}: {}", error.message));
            continue;
        }
        match schema::normalize(name, &value) {
            Ok(normalized) => {
                if let Err(difference) = covers(&value, &normalized, name) {
                    failures.push(difference);
                }
                schema::validate(name, &normalized).unwrap();
            }
            Err(error) => failures.push(format!("{name}: {}", error.message)),
        }
    }
    assert!(failures.is_empty(), "{failures:#?}");
}

#[test]
fn mistyped_run_fields_are_rejected() {
    let cases = [
        ("metadata", json!(5)),
        ("status", json!("bogus")),
        ("instructions", Value::Null),
        ("tools", json!([{ "type": "browser" }])),
        ("truncation_strategy", json!({ "type": "first_messages" })),
        ("usage", json!({ "prompt_tokens": -1, "completion_tokens": 0, "total_tokens": 0 })),
    ];
    for (field, replacement) in cases {
        let mut value = run();
        value[field] = replacement;
        let error = schema::validate("RunObject", &value).unwrap_err();
        assert_eq!(error.error_type, "schema", "{field}");
        assert_eq!(error.param.as_deref(), Some("RunObject"), "{field}");
        assert!(schema::normalize("RunObject", &value).is_err(), "{field}");
    }
}

#[test]
fn missing_required_fields_are_rejected() {
    let mut value = message();
    value.as_object_mut().unwrap().remove("thread_id");
    assert!(schema::validate("MessageObject", &value).is_err());

    let mut value = eval_run();
    value["data_source"]["type"] = json!("csv");
    assert!(schema::validate("EvalRun", &value).is_err());

    let mut value = audit_log();
    value["actor"]["type"] = json!("robot");
    assert!(schema::validate("AuditLog", &value).is_err());

    let mut value = vector_store_file();
    value["status"] = json!("processing");
    assert!(schema::validate("VectorStoreFileObject", &value).is_err());
}

#[test]
fn normalization_drops_nulls_and_fills_defaults() {
    let normalized = schema::normalize(
        "CreateFineTuningJobRequest",
        &json!({
            "training_file": "file-abc123",
            "model": "gpt-4o-mini",
            "method": { "type": "dpo", "dpo": { "hyperparameters": { "beta": 0.25 } } }
        }),
    )
    .unwrap();
    assert_eq!(
        normalized["method"]["dpo"]["hyperparameters"],
        json!({ "beta": 0.25, "batch_size": "auto", "learning_rate_multiplier": "auto", "n_epochs": "auto" })
    );

    let normalized = schema::normalize("Batch", &batch()).unwrap();
    assert!(normalized.get("failed_at").is_none());
    assert_eq!(normalized["request_counts"]["failed"], 5);
}
