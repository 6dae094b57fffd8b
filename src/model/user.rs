use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public part of a user, safe to disclose to any caller.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct PublicUserDto {
    pub id: i64,
    pub name: String,
}

/// Friend returned after accepting an invitation, including its position.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct FriendDto {
    pub id: i64,
    pub name: String,
    pub longitude: f64,
    pub latitude: f64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct UserListDto {
    pub list: Vec<PublicUserDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct FriendsIdsDto {
    pub friends: Vec<i64>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct PositionDto {
    pub id: i64,
    pub longitude: f64,
    pub latitude: f64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct PositionsDto {
    pub positions: Vec<PositionDto>,
}
