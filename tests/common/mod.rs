#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::Request;

pub fn issue_node(n: u32) -> Value {
    json!({
        "node": {
            "id": format!("I_{}", n),
            "title": format!("Issue {}", n),
            "url": format!("https://github.com/facebook/react/issues/{}", n),
            "reactions": {
                "edges": [
                    { "node": { "id": format!("R_{}_1", n), "content": "THUMBS_UP" } },
                    { "node": { "id": format!("R_{}_2", n), "content": "EYES" } }
                ]
            }
        }
    })
}

pub fn issues_page(ids: &[u32], total_count: u64, end_cursor: &str, has_next_page: bool) -> Value {
    json!({
        "data": {
            "organization": {
                "name": "Meta",
                "url": "https://github.com/facebook",
                "repository": {
                    "name": "react",
                    "url": "https://github.com/facebook/react",
                    "issues": {
                        "edges": ids.iter().map(|n| issue_node(*n)).collect::<Vec<_>>(),
                        "totalCount": total_count,
                        "pageInfo": { "endCursor": end_cursor, "hasNextPage": has_next_page }
                    }
                }
            }
        }
    })
}

pub fn variables(request: &Request) -> Value {
    let body: Value = serde_json::from_slice(&request.body).unwrap_or(Value::Null);
    body["variables"].clone()
}

pub fn without_cursor(request: &Request) -> bool {
    variables(request).get("cursor").is_none()
}
