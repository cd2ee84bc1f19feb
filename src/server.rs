//! MCP ServerHandler implementation for RiotService.
//!
//! Exposes five tools over the MCP wire: player-id lookup, champion
//! masteries, newest match ids, match detail, and match timeline. Every tool
//! resolves to a single text content block; fetch and formatting failures are
//! returned as that text rather than as protocol errors, so one bad call can
//! never take down the session.

use crate::api::client::RiotApiClient;
use crate::config::Config;
use crate::error::AppError;
use crate::summary;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, InitializeResult, ListToolsResult,
    PaginatedRequestParam, ServerCapabilities, Tool, ToolAnnotations,
};
use rmcp::ServerHandler;
use serde_json::{json, Map as JsonMap, Value};
use std::sync::Arc;

#[derive(Clone)]
pub struct RiotService {
    client: RiotApiClient,
}

impl RiotService {
    pub fn new(config: Config) -> Result<Self, AppError> {
        Ok(RiotService {
            client: RiotApiClient::new(config)?,
        })
    }

    pub async fn get_player_id(&self, region: &str, name: &str, tag_line: &str) -> String {
        match self.client.get_account(region, name, tag_line).await {
            Ok(data) => summary::summarize_account(data),
            Err(e) => e.to_string(),
        }
    }

    pub async fn get_champion_masteries(&self, puuid: &str, region: &str) -> String {
        match self.client.get_champion_masteries(region, puuid).await {
            Ok(data) => summary::summarize_masteries(data),
            Err(e) => e.to_string(),
        }
    }

    pub async fn get_newest_matches(&self, region: &str, puuid: &str, count: usize) -> String {
        match self.client.get_match_ids(region, puuid, count).await {
            Ok(data) => summary::summarize_match_ids(data, count),
            Err(e) => e.to_string(),
        }
    }

    pub async fn get_match_by_id(&self, region: &str, match_id: &str) -> String {
        match self.client.get_match(region, match_id).await {
            Ok(data) => summary::summarize_match(data),
            Err(e) => e.to_string(),
        }
    }

    pub async fn get_match_timeline_by_id(&self, region: &str, match_id: &str) -> String {
        match self.client.get_match_timeline(region, match_id).await {
            Ok(data) => summary::summarize_timeline(match_id, data),
            Err(e) => e.to_string(),
        }
    }
}

fn object_schema(properties: Value, required: &[&str]) -> Arc<JsonMap<String, Value>> {
    let mut schema = JsonMap::new();
    schema.insert("type".into(), json!("object"));
    schema.insert("properties".into(), properties);
    schema.insert("required".into(), json!(required));
    schema.insert("additionalProperties".into(), json!(false));
    Arc::new(schema)
}

const REGION_DESC: &str = "Region code: one of na, euw, eune, kr, jp";

fn require_str<'a>(
    args: &'a JsonMap<String, Value>,
    key: &str,
) -> Result<&'a str, rmcp::ErrorData> {
    args.get(key).and_then(|v| v.as_str()).ok_or_else(|| {
        rmcp::ErrorData::invalid_params(format!("missing required argument '{key}'"), None)
    })
}

fn require_count(args: &JsonMap<String, Value>, key: &str) -> Result<usize, rmcp::ErrorData> {
    args.get(key)
        .and_then(|v| v.as_u64())
        .filter(|n| *n > 0)
        .map(|n| n as usize)
        .ok_or_else(|| {
            rmcp::ErrorData::invalid_params(
                format!("argument '{key}' must be a positive integer"),
                None,
            )
        })
}

impl ServerHandler for RiotService {
    fn get_info(&self) -> InitializeResult {
        InitializeResult {
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            instructions: Some(
                "Riot Games lookups: resolve a player PUUID first, then query \
                 masteries, match ids, match detail, or a match timeline."
                    .into(),
            ),
            ..Default::default()
        }
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListToolsResult, rmcp::ErrorData>> + Send + '_
    {
        let tools = vec![
            Tool {
                name: "get_player_id".into(),
                title: Some("Look up a player's PUUID".into()),
                description: Some(
                    "Find the PUUID of a player from their Riot ID (name and tag line).".into(),
                ),
                input_schema: object_schema(
                    json!({
                        "region": { "type": "string", "description": REGION_DESC },
                        "name": { "type": "string", "description": "Riot ID game name" },
                        "tag_line": { "type": "string", "description": "Riot ID tag line (after the #)" }
                    }),
                    &["region", "name", "tag_line"],
                ),
                output_schema: None,
                annotations: Some(ToolAnnotations::default()),
                icons: None,
                meta: None,
            },
            Tool {
                name: "get_champion_masteries".into(),
                title: Some("Champion masteries for an account".into()),
                description: Some(
                    "List the top 10 champion masteries (level and points) for a PUUID.".into(),
                ),
                input_schema: object_schema(
                    json!({
                        "puuid": { "type": "string", "description": "Player PUUID" },
                        "region": { "type": "string", "description": REGION_DESC }
                    }),
                    &["puuid", "region"],
                ),
                output_schema: None,
                annotations: Some(ToolAnnotations::default()),
                icons: None,
                meta: None,
            },
            Tool {
                name: "get_newest_matches".into(),
                title: Some("Newest match ids for an account".into()),
                description: Some(
                    "List the newest match ids for a PUUID, one per line.".into(),
                ),
                input_schema: object_schema(
                    json!({
                        "region": { "type": "string", "description": REGION_DESC },
                        "puuid": { "type": "string", "description": "Player PUUID" },
                        "count": { "type": "integer", "description": "Number of match ids to fetch" }
                    }),
                    &["region", "puuid", "count"],
                ),
                output_schema: None,
                annotations: Some(ToolAnnotations::default()),
                icons: None,
                meta: None,
            },
            Tool {
                name: "get_match_by_id".into(),
                title: Some("Match detail".into()),
                description: Some(
                    "Fetch a match by id: game mode, duration, and per-participant \
                     K/D/A, time spent dead, and win/loss."
                        .into(),
                ),
                input_schema: object_schema(
                    json!({
                        "region": { "type": "string", "description": REGION_DESC },
                        "match_id": { "type": "string", "description": "Match id, e.g. NA1_1234567890" }
                    }),
                    &["region", "match_id"],
                ),
                output_schema: None,
                annotations: Some(ToolAnnotations::default()),
                icons: None,
                meta: None,
            },
            Tool {
                name: "get_match_timeline_by_id".into(),
                title: Some("Match timeline summary".into()),
                description: Some(
                    "Fetch a match timeline by id and summarize key events \
                     (kills, buildings, elite monsters, item purchases, skill-ups) \
                     as a chronological log."
                        .into(),
                ),
                input_schema: object_schema(
                    json!({
                        "region": { "type": "string", "description": REGION_DESC },
                        "match_id": { "type": "string", "description": "Match id, e.g. NA1_1234567890" }
                    }),
                    &["region", "match_id"],
                ),
                output_schema: None,
                annotations: Some(ToolAnnotations::default()),
                icons: None,
                meta: None,
            },
        ];

        std::future::ready(Ok(ListToolsResult {
            tools,
            next_cursor: None,
        }))
    }

    fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: rmcp::service::RequestContext<rmcp::RoleServer>,
    ) -> impl std::future::Future<Output = Result<CallToolResult, rmcp::ErrorData>> + Send + '_
    {
        Box::pin(async move {
            let args = request.arguments.unwrap_or_default();
            tracing::debug!(tool = %request.name, "tool call");

            let text = match request.name.as_ref() {
                "get_player_id" => {
                    let region = require_str(&args, "region")?;
                    let name = require_str(&args, "name")?;
                    let tag_line = require_str(&args, "tag_line")?;
                    self.get_player_id(region, name, tag_line).await
                }
                "get_champion_masteries" => {
                    let puuid = require_str(&args, "puuid")?;
                    let region = require_str(&args, "region")?;
                    self.get_champion_masteries(puuid, region).await
                }
                "get_newest_matches" => {
                    let region = require_str(&args, "region")?;
                    let puuid = require_str(&args, "puuid")?;
                    let count = require_count(&args, "count")?;
                    self.get_newest_matches(region, puuid, count).await
                }
                "get_match_by_id" => {
                    let region = require_str(&args, "region")?;
                    let match_id = require_str(&args, "match_id")?;
                    self.get_match_by_id(region, match_id).await
                }
                "get_match_timeline_by_id" => {
                    let region = require_str(&args, "region")?;
                    let match_id = require_str(&args, "match_id")?;
                    self.get_match_timeline_by_id(region, match_id).await
                }
                other => {
                    return Err(rmcp::ErrorData::invalid_params(
                        format!("unknown tool: {other}"),
                        None,
                    ))
                }
            };

            Ok(CallToolResult {
                content: vec![Content::text(text)],
                is_error: Some(false),
                structured_content: None,
                meta: None,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(value: Value) -> JsonMap<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn require_str_rejects_missing_and_non_string() {
        let map = args(json!({"region": 42}));
        assert!(require_str(&map, "region").is_err());
        assert!(require_str(&map, "name").is_err());
        let map = args(json!({"region": "euw"}));
        assert_eq!(require_str(&map, "region").unwrap(), "euw");
    }

    #[test]
    fn require_count_rejects_zero_and_negatives() {
        assert!(require_count(&args(json!({"count": 0})), "count").is_err());
        assert!(require_count(&args(json!({"count": -3})), "count").is_err());
        assert_eq!(require_count(&args(json!({"count": 5})), "count").unwrap(), 5);
    }

    #[tokio::test]
    async fn tool_errors_pass_through_as_result_text() {
        let service = RiotService::new(Config {
            api_key: "test-key".to_string(),
        })
        .expect("service builds");

        // An unknown region fails before any network I/O, so each tool's
        // error-to-text boundary can be checked offline.
        assert_eq!(
            service.get_player_id("oce", "Name", "TAG").await,
            "Unknown region 'oce'"
        );
        assert_eq!(
            service.get_champion_masteries("puuid-1", "oce").await,
            "Unknown region 'oce'"
        );
        assert_eq!(
            service.get_newest_matches("oce", "puuid-1", 5).await,
            "Unknown region 'oce'"
        );
        assert_eq!(
            service.get_match_by_id("oce", "NA1_1").await,
            "Unknown region 'oce'"
        );
        assert_eq!(
            service.get_match_timeline_by_id("oce", "NA1_1").await,
            "Unknown region 'oce'"
        );
    }

    #[test]
    fn schemas_mark_object_type_and_close_properties() {
        let schema = object_schema(json!({"region": {"type": "string"}}), &["region"]);
        assert_eq!(schema.get("type").unwrap(), "object");
        assert_eq!(schema.get("additionalProperties").unwrap(), false);
        assert_eq!(schema.get("required").unwrap(), &json!(["region"]));
    }
}
