//! Response formatters: raw Riot JSON in, bounded human-readable text out.
//!
//! Each formatter owns the post-fetch half of one tool. They never touch the
//! network, which keeps them unit-testable against canned payloads. Field
//! access goes through typed DTOs so a body missing expected fields reports a
//! malformed-response message instead of panicking.

use crate::api::models::{
    AccountDto, MasteryDto, MatchDto, TimelineDto, TimelineEvent, TimelineParticipantDto,
};
use crate::error::AppError;
use serde_json::Value;
use std::collections::HashMap;

/// Top 10 masteries only, so the response does not flood the model.
const MASTERY_LIMIT: usize = 10;

fn is_empty_payload(data: &Value) -> bool {
    match data {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        _ => false,
    }
}

fn malformed(err: serde_json::Error) -> String {
    AppError::Malformed(err.to_string()).to_string()
}

pub fn summarize_account(data: Value) -> String {
    if is_empty_payload(&data) {
        return "Found no account with that name in the server".to_string();
    }
    match serde_json::from_value::<AccountDto>(data) {
        Ok(account) => format!(
            "Name:{}#{} PUUID: {}",
            account.game_name, account.tag_line, account.puuid
        ),
        Err(e) => malformed(e),
    }
}

pub fn summarize_masteries(data: Value) -> String {
    if is_empty_payload(&data) {
        return "Account does not exist on region".to_string();
    }
    let masteries: Vec<MasteryDto> = match serde_json::from_value(data) {
        Ok(m) => m,
        Err(e) => return malformed(e),
    };
    masteries
        .iter()
        .take(MASTERY_LIMIT)
        .map(|m| {
            format!(
                "Champion {}: Level {} - {} pts",
                m.champion_id, m.champion_level, m.champion_points
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn summarize_match_ids(data: Value, count: usize) -> String {
    if is_empty_payload(&data) {
        return "Account has no matches or does not exist".to_string();
    }
    let ids: Vec<String> = match serde_json::from_value(data) {
        Ok(ids) => ids,
        Err(e) => return malformed(e),
    };
    // The count query parameter already bounds the upstream list; this is a
    // second, client-side bound.
    ids.into_iter().take(count).collect::<Vec<_>>().join("\n")
}

pub fn summarize_match(data: Value) -> String {
    if is_empty_payload(&data) {
        return "Match does not exist".to_string();
    }
    let m: MatchDto = match serde_json::from_value(data) {
        Ok(m) => m,
        Err(e) => return malformed(e),
    };
    let mut lines = vec![format!(
        "Mode: {} - Duration: {}min",
        m.info.game_mode,
        m.info.game_duration / 60
    )];
    for p in &m.info.participants {
        lines.push(format!(
            "{} - {} - {}/{}/{} time spent dead{} - {} -{}",
            p.riot_id_game_name,
            p.champion_name,
            p.kills,
            p.deaths,
            p.assists,
            p.total_time_spent_dead,
            if p.win { "Win" } else { "Loss" },
            p.time_played
        ));
    }
    lines.join("\n")
}

/// `Name(Champion)` label for one seat, `?(?)` when the id is unknown.
fn participant_label(table: &HashMap<i64, (String, String)>, id: i64) -> String {
    match table.get(&id) {
        Some((name, champion)) => format!("{name}({champion})"),
        None => "?(?)".to_string(),
    }
}

fn participant_table(participants: Vec<TimelineParticipantDto>) -> HashMap<i64, (String, String)> {
    participants
        .into_iter()
        .map(|p| {
            let id = p.participant_id;
            let name = p
                .riot_id_game_name
                .filter(|s| !s.is_empty())
                .or(p.summoner_name.filter(|s| !s.is_empty()))
                .unwrap_or_else(|| format!("Player {id}"));
            let champion = p.champion_name.unwrap_or_else(|| "Unknown".to_string());
            (id, (name, champion))
        })
        .collect()
}

/// Walks the timeline frames in order and renders one log line per
/// recognized event, prefixed with the frame's `[MM:SS]` game clock.
pub fn summarize_timeline(match_id: &str, data: Value) -> String {
    if is_empty_payload(&data) {
        return "Match does not exist".to_string();
    }
    let timeline: TimelineDto = match serde_json::from_value(data) {
        Ok(t) => t,
        Err(e) => return malformed(e),
    };
    let info = timeline.info;
    let table = participant_table(info.participants);
    let label = |id: i64| participant_label(&table, id);

    let mut lines = vec![format!(
        "Match: {} - Frame interval: {}s",
        match_id,
        info.frame_interval / 1000
    )];

    for frame in &info.frames {
        let total_seconds = frame.timestamp / 1000;
        let clock = format!("[{:02}:{:02}]", total_seconds / 60, total_seconds % 60);
        for event in &frame.events {
            match event {
                TimelineEvent::ChampionKill {
                    killer_id,
                    victim_id,
                    assisting_participant_ids,
                } => lines.push(format!(
                    "{clock} KILL - Player {} killed Player {} (assists: {:?})",
                    label(*killer_id),
                    label(*victim_id),
                    assisting_participant_ids
                )),
                TimelineEvent::BuildingKill {
                    team_id,
                    building_type,
                    lane_type,
                } => {
                    let team = match team_id {
                        100 => "Blue Team".to_string(),
                        200 => "Red Team".to_string(),
                        other => other.to_string(),
                    };
                    lines.push(format!(
                        "{clock} BUILDING - Team {team} lost {building_type} ({lane_type})"
                    ));
                }
                TimelineEvent::EliteMonsterKill {
                    killer_id,
                    monster_type,
                    monster_sub_type,
                } => lines.push(format!(
                    "{clock} MONSTER - Player {} killed {monster_type} {monster_sub_type}",
                    label(*killer_id)
                )),
                TimelineEvent::ItemPurchased {
                    participant_id,
                    item_id,
                } => lines.push(format!(
                    "{clock} ITEM - Player {} purchased item {item_id}",
                    label(*participant_id)
                )),
                TimelineEvent::SkillLevelUp {
                    participant_id,
                    skill_slot,
                } => {
                    let skill = match skill_slot {
                        1 => "Q".to_string(),
                        2 => "W".to_string(),
                        3 => "E".to_string(),
                        4 => "R".to_string(),
                        other => other.to_string(),
                    };
                    lines.push(format!(
                        "{clock} SKILL - Player {} leveled up {skill}",
                        label(*participant_id)
                    ));
                }
                TimelineEvent::Ignored => {}
            }
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn account_formats_name_tag_and_puuid() {
        let out = summarize_account(json!({
            "puuid": "abc-123",
            "gameName": "Faker",
            "tagLine": "KR1"
        }));
        assert_eq!(out, "Name:Faker#KR1 PUUID: abc-123");
    }

    #[test]
    fn account_empty_body_reports_no_account() {
        assert_eq!(
            summarize_account(json!({})),
            "Found no account with that name in the server"
        );
        assert_eq!(
            summarize_account(Value::Null),
            "Found no account with that name in the server"
        );
    }

    #[test]
    fn account_missing_fields_is_malformed() {
        let out = summarize_account(json!({"puuid": "abc-123"}));
        assert!(out.starts_with("Malformed response:"), "got: {out}");
    }

    fn mastery(id: i64) -> Value {
        json!({"championId": id, "championLevel": 7, "championPoints": 1000 * id})
    }

    #[test]
    fn masteries_cap_at_ten_in_input_order() {
        let data = Value::Array((1..=12).map(mastery).collect());
        let out = summarize_masteries(data);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "Champion 1: Level 7 - 1000 pts");
        assert_eq!(lines[9], "Champion 10: Level 7 - 10000 pts");
    }

    #[test]
    fn masteries_short_list_keeps_all_entries() {
        let data = Value::Array((1..=3).map(mastery).collect());
        assert_eq!(summarize_masteries(data).lines().count(), 3);
    }

    #[test]
    fn masteries_empty_list_reports_missing_account() {
        assert_eq!(
            summarize_masteries(json!([])),
            "Account does not exist on region"
        );
    }

    #[test]
    fn match_ids_truncate_to_requested_count() {
        let data = json!(["NA1_1", "NA1_2", "NA1_3", "NA1_4", "NA1_5"]);
        assert_eq!(summarize_match_ids(data, 2), "NA1_1\nNA1_2");
    }

    #[test]
    fn match_ids_shorter_list_than_requested_returns_all() {
        let data = json!(["NA1_1", "NA1_2", "NA1_3"]);
        assert_eq!(summarize_match_ids(data, 5).lines().count(), 3);
    }

    #[test]
    fn match_ids_empty_list_reports_missing() {
        assert_eq!(
            summarize_match_ids(json!([]), 5),
            "Account has no matches or does not exist"
        );
    }

    fn participant(name: &str, champion: &str, win: bool) -> Value {
        json!({
            "riotIdGameName": name,
            "championName": champion,
            "kills": 5,
            "deaths": 2,
            "assists": 8,
            "totalTimeSpentDead": 45,
            "win": win,
            "timePlayed": 1500
        })
    }

    #[test]
    fn match_detail_renders_header_and_participants() {
        let data = json!({
            "info": {
                "gameMode": "CLASSIC",
                "gameDuration": 1500,
                "participants": [
                    participant("Alice", "Ahri", true),
                    participant("Bob", "Garen", false),
                ]
            }
        });
        let out = summarize_match(data);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Mode: CLASSIC - Duration: 25min");
        assert_eq!(
            lines[1],
            "Alice - Ahri - 5/2/8 time spent dead45 - Win -1500"
        );
        assert_eq!(
            lines[2],
            "Bob - Garen - 5/2/8 time spent dead45 - Loss -1500"
        );
    }

    #[test]
    fn match_detail_missing_participant_field_is_malformed() {
        let data = json!({
            "info": {
                "gameMode": "ARAM",
                "gameDuration": 900,
                "participants": [{"championName": "Lux"}]
            }
        });
        assert!(summarize_match(data).starts_with("Malformed response:"));
    }

    fn timeline_fixture(events: Value) -> Value {
        json!({
            "info": {
                "frameInterval": 60000,
                "participants": [
                    {"participantId": 1, "riotIdGameName": "Alice", "championName": "Ahri"},
                    {"participantId": 2, "summonerName": "Bob", "championName": "Garen"},
                    {"participantId": 3}
                ],
                "frames": [
                    {"timestamp": 125000, "events": events}
                ]
            }
        })
    }

    #[test]
    fn timeline_header_uses_integer_seconds() {
        let out = summarize_timeline("NA1_42", timeline_fixture(json!([])));
        assert_eq!(out, "Match: NA1_42 - Frame interval: 60s");
    }

    #[test]
    fn timeline_kill_line_and_unknown_event_in_same_frame() {
        let out = summarize_timeline(
            "NA1_42",
            timeline_fixture(json!([
                {"type": "WARD_PLACED", "creatorId": 4},
                {"type": "CHAMPION_KILL", "killerId": 1, "victimId": 2,
                 "assistingParticipantIds": [3]},
            ])),
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "[02:05] KILL - Player Alice(Ahri) killed Player Bob(Garen) (assists: [3])"
        );
    }

    #[test]
    fn timeline_clock_zero_pads_both_fields() {
        let data = json!({
            "info": {
                "frameInterval": 60000,
                "participants": [],
                "frames": [{"timestamp": 0, "events": [
                    {"type": "ITEM_PURCHASED", "participantId": 9, "itemId": 1001}
                ]}]
            }
        });
        let out = summarize_timeline("M", data);
        assert_eq!(
            out.lines().nth(1).unwrap(),
            "[00:00] ITEM - Player ?(?) purchased item 1001"
        );
    }

    #[test]
    fn timeline_building_kill_maps_team_ids_with_literal_fallback() {
        let out = summarize_timeline(
            "M",
            timeline_fixture(json!([
                {"type": "BUILDING_KILL", "teamId": 100,
                 "buildingType": "TOWER_BUILDING", "laneType": "MID_LANE"},
                {"type": "BUILDING_KILL", "teamId": 300,
                 "buildingType": "TOWER_BUILDING", "laneType": "TOP_LANE"},
            ])),
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines[1],
            "[02:05] BUILDING - Team Blue Team lost TOWER_BUILDING (MID_LANE)"
        );
        assert_eq!(
            lines[2],
            "[02:05] BUILDING - Team 300 lost TOWER_BUILDING (TOP_LANE)"
        );
    }

    #[test]
    fn timeline_monster_item_and_skill_lines() {
        let out = summarize_timeline(
            "M",
            timeline_fixture(json!([
                {"type": "ELITE_MONSTER_KILL", "killerId": 2,
                 "monsterType": "DRAGON", "monsterSubType": "FIRE_DRAGON"},
                {"type": "SKILL_LEVEL_UP", "participantId": 1, "skillSlot": 4},
                {"type": "SKILL_LEVEL_UP", "participantId": 1, "skillSlot": 7},
            ])),
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines[1],
            "[02:05] MONSTER - Player Bob(Garen) killed DRAGON FIRE_DRAGON"
        );
        assert_eq!(lines[2], "[02:05] SKILL - Player Alice(Ahri) leveled up R");
        assert_eq!(lines[3], "[02:05] SKILL - Player Alice(Ahri) leveled up 7");
    }

    #[test]
    fn timeline_name_fallbacks_per_participant() {
        // Seat 2 has only a legacy summoner name, seat 3 has nothing.
        let out = summarize_timeline(
            "M",
            timeline_fixture(json!([
                {"type": "ITEM_PURCHASED", "participantId": 2, "itemId": 2003},
                {"type": "ITEM_PURCHASED", "participantId": 3, "itemId": 2003},
            ])),
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines[1],
            "[02:05] ITEM - Player Bob(Garen) purchased item 2003"
        );
        assert_eq!(
            lines[2],
            "[02:05] ITEM - Player Player 3(Unknown) purchased item 2003"
        );
    }

    #[test]
    fn timeline_empty_body_reports_missing_match() {
        assert_eq!(summarize_timeline("M", json!({})), "Match does not exist");
    }
}
