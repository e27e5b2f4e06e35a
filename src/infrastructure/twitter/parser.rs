//! Home timeline payload parsing
//!
//! The payload is a JSON array of tweet objects. Fields are checked in a
//! fixed order and the first one missing fails the whole page, so a
//! response either parses completely or not at all.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use reqwest::Url;
use serde_json::{Map, Value};

use crate::domain::{
    ObjectId, TimelineResponse, Tweet, TwitterOperationError, TwitterParsingError, User,
};

type Object = Map<String, Value>;
type ParseResult<T> = Result<T, TwitterParsingError>;

/// Format of `created_at`, e.g. `Wed Aug 27 13:08:45 +0000 2008`
pub const CREATED_AT_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

pub fn parse_timeline(data: &[u8]) -> Result<TimelineResponse, TwitterOperationError> {
    Ok(parse_raw_tweets(data)?)
}

fn parse_raw_tweets(data: &[u8]) -> ParseResult<TimelineResponse> {
    if data.iter().all(u8::is_ascii_whitespace) {
        return Err(TwitterParsingError::MissingResponse);
    }
    let json: Value = serde_json::from_slice(data)
        .map_err(|e| TwitterParsingError::ParsingError(e.to_string()))?;
    let Value::Array(raw_tweets) = json else {
        return Err(TwitterParsingError::UnsupportedType);
    };

    let mut users: HashMap<ObjectId<User>, User> = HashMap::new();
    let mut tweets = Vec::with_capacity(raw_tweets.len());
    for raw_tweet in &raw_tweets {
        let raw_tweet = raw_tweet
            .as_object()
            .ok_or(TwitterParsingError::UnsupportedType)?;
        let tweet = parse_tweet(raw_tweet)?;
        if !users.contains_key(&tweet.created_by) {
            let user = parse_user(raw_tweet)?;
            users.insert(user.id.clone(), user);
        }
        tweets.push(tweet);
    }

    Ok(TimelineResponse::new(tweets, users))
}

fn string<'a>(object: &'a Object, key: &str, attribute: &str) -> ParseResult<&'a str> {
    object
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| TwitterParsingError::missing(attribute))
}

fn parse_tweet(raw: &Object) -> ParseResult<Tweet> {
    let id = string(raw, "id_str", "id")?;
    let text = string(raw, "text", "text")?;
    let liked = raw
        .get("favorited")
        .and_then(Value::as_bool)
        .ok_or_else(|| TwitterParsingError::missing("favorited"))?;
    let created_at = raw
        .get("created_at")
        .and_then(Value::as_str)
        .and_then(parse_created_at)
        .ok_or_else(|| TwitterParsingError::missing("created_at"))?;
    let created_by = raw
        .get("user")
        .and_then(Value::as_object)
        .and_then(|user| user.get("id_str"))
        .and_then(Value::as_str)
        .ok_or_else(|| TwitterParsingError::missing("user.id_str"))?;
    let place = match raw.get("place").and_then(Value::as_object) {
        Some(place) => Some(parse_place(place)?),
        None => None,
    };

    Ok(Tweet {
        id: ObjectId::new(id),
        text: text.to_string(),
        created_at,
        created_by: ObjectId::new(created_by),
        liked,
        place,
    })
}

fn parse_place(place: &Object) -> ParseResult<String> {
    let full_name = string(place, "full_name", "place.full_name")?;
    let country = string(place, "country", "place.country")?;
    Ok(format!("{full_name}, {country}"))
}

fn parse_user(raw_tweet: &Object) -> ParseResult<User> {
    let raw = raw_tweet
        .get("user")
        .and_then(Value::as_object)
        .ok_or_else(|| TwitterParsingError::missing("user"))?;
    let id = string(raw, "id_str", "user.id")?;
    let slug = string(raw, "screen_name", "user.screen_name")?;
    let name = string(raw, "name", "user.name")?;
    let avatar_url = raw
        .get("profile_image_url_https")
        .and_then(Value::as_str)
        .and_then(|url| Url::parse(url).ok())
        .ok_or_else(|| TwitterParsingError::missing("user.profile_image_url_https"))?;

    Ok(User::new(
        ObjectId::new(id),
        slug.to_string(),
        name.to_string(),
        avatar_url,
    ))
}

pub fn parse_created_at(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_str(raw, CREATED_AT_FORMAT)
        .ok()
        .map(|date| date.with_timezone(&Utc))
}
