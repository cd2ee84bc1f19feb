//! Region resolution and URL builders.
//!
//! The Riot API is partitioned twice: account and match data live on a
//! regional routing cluster (americas/europe/asia), while mastery data lives
//! on the platform shard (na1, euw1, ...). Both lookups are closed maps over
//! the supported region codes and fail explicitly on anything else.

use crate::error::AppError;

/// Routing cluster for account-v1 and match-v5 endpoints.
pub fn regional_base_url(region: &str) -> Result<&'static str, AppError> {
    match region {
        "na" => Ok("https://americas.api.riotgames.com"),
        "euw" | "eune" => Ok("https://europe.api.riotgames.com"),
        "kr" | "jp" => Ok("https://asia.api.riotgames.com"),
        _ => Err(AppError::UnknownRegion(region.to_string())),
    }
}

/// Platform shard for champion-mastery-v4 endpoints.
pub fn platform_base_url(region: &str) -> Result<&'static str, AppError> {
    match region {
        "na" => Ok("https://na1.api.riotgames.com"),
        "euw" => Ok("https://euw1.api.riotgames.com"),
        "eune" => Ok("https://eun1.api.riotgames.com"),
        "kr" => Ok("https://kr.api.riotgames.com"),
        "jp" => Ok("https://jp1.api.riotgames.com"),
        _ => Err(AppError::UnknownRegion(region.to_string())),
    }
}

// Name and tag are passed through exactly as supplied; the upstream API's
// case handling is undocumented, so no folding happens here.
pub fn account_url(region: &str, game_name: &str, tag_line: &str) -> Result<String, AppError> {
    Ok(format!(
        "{}/riot/account/v1/accounts/by-riot-id/{}/{}",
        regional_base_url(region)?,
        game_name,
        tag_line
    ))
}

pub fn masteries_url(region: &str, puuid: &str) -> Result<String, AppError> {
    Ok(format!(
        "{}/lol/champion-mastery/v4/champion-masteries/by-puuid/{}",
        platform_base_url(region)?,
        puuid
    ))
}

pub fn match_ids_url(region: &str, puuid: &str, count: usize) -> Result<String, AppError> {
    Ok(format!(
        "{}/lol/match/v5/matches/by-puuid/{}/ids?count={}",
        regional_base_url(region)?,
        puuid,
        count
    ))
}

pub fn match_url(region: &str, match_id: &str) -> Result<String, AppError> {
    Ok(format!(
        "{}/lol/match/v5/matches/{}",
        regional_base_url(region)?,
        match_id
    ))
}

pub fn timeline_url(region: &str, match_id: &str) -> Result<String, AppError> {
    Ok(format!(
        "{}/lol/match/v5/matches/{}/timeline",
        regional_base_url(region)?,
        match_id
    ))
}
