use serde::Deserialize;

// Account V1 response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub puuid: String,
    pub game_name: String,
    pub tag_line: String,
}

// Champion Mastery V4 response entry
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasteryDto {
    pub champion_id: i64,
    pub champion_level: i64,
    pub champion_points: i64,
}

// Match V5 response
#[derive(Debug, Deserialize)]
pub struct MatchDto {
    pub info: MatchInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    pub game_mode: String,
    pub game_duration: i64,
    pub participants: Vec<ParticipantDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub riot_id_game_name: String,
    pub champion_name: String,
    pub kills: i64,
    pub deaths: i64,
    pub assists: i64,
    pub total_time_spent_dead: i64,
    pub win: bool,
    pub time_played: i64,
}

// Match V5 timeline response
#[derive(Debug, Deserialize)]
pub struct TimelineDto {
    pub info: TimelineInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineInfo {
    #[serde(default)]
    pub frame_interval: i64,
    #[serde(default)]
    pub participants: Vec<TimelineParticipantDto>,
    #[serde(default)]
    pub frames: Vec<FrameDto>,
}

/// Per-match seat record; only used to label timeline events.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineParticipantDto {
    pub participant_id: i64,
    pub riot_id_game_name: Option<String>,
    pub summoner_name: Option<String>,
    pub champion_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FrameDto {
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub events: Vec<TimelineEvent>,
}

/// The closed set of timeline events the summarizer renders.
///
/// The upstream stream carries many more event types (wards, level ups,
/// objective bounties, ...); anything not listed here deserializes into
/// `Ignored` and produces no output line.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum TimelineEvent {
    #[serde(rename = "CHAMPION_KILL", rename_all = "camelCase")]
    ChampionKill {
        #[serde(default)]
        killer_id: i64,
        #[serde(default)]
        victim_id: i64,
        #[serde(default)]
        assisting_participant_ids: Vec<i64>,
    },
    #[serde(rename = "BUILDING_KILL", rename_all = "camelCase")]
    BuildingKill {
        #[serde(default)]
        team_id: i64,
        #[serde(default)]
        building_type: String,
        #[serde(default)]
        lane_type: String,
    },
    #[serde(rename = "ELITE_MONSTER_KILL", rename_all = "camelCase")]
    EliteMonsterKill {
        #[serde(default)]
        killer_id: i64,
        #[serde(default)]
        monster_type: String,
        #[serde(default)]
        monster_sub_type: String,
    },
    #[serde(rename = "ITEM_PURCHASED", rename_all = "camelCase")]
    ItemPurchased {
        #[serde(default)]
        participant_id: i64,
        #[serde(default)]
        item_id: i64,
    },
    #[serde(rename = "SKILL_LEVEL_UP", rename_all = "camelCase")]
    SkillLevelUp {
        #[serde(default)]
        participant_id: i64,
        #[serde(default)]
        skill_slot: i64,
    },
    #[serde(other)]
    Ignored,
}
