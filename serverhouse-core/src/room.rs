use crate::RenderError;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The six portfolio rooms. Each selects a Canvas2D layout and a fragment
/// shader effect; the discriminant is the selector the shader sees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RoomType {
    #[default]
    ServerRoom = 0,
    DatabaseRoom = 1,
    CodeLaboratory = 2,
    ProjectWarehouse = 3,
    CommunicationHub = 4,
    SystemStatus = 5,
}

impl RoomType {
    /// All rooms in selector order.
    pub const ALL: [RoomType; 6] = [
        RoomType::ServerRoom,
        RoomType::DatabaseRoom,
        RoomType::CodeLaboratory,
        RoomType::ProjectWarehouse,
        RoomType::CommunicationHub,
        RoomType::SystemStatus,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }

    /// Value written to the `u_roomType` uniform.
    pub fn shader_selector(self) -> i32 {
        self as i32
    }

    pub fn from_index(index: i64) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|room| room.id() == id)
    }

    pub fn id(self) -> &'static str {
        match self {
            RoomType::ServerRoom => "server-room",
            RoomType::DatabaseRoom => "database-room",
            RoomType::CodeLaboratory => "code-laboratory",
            RoomType::ProjectWarehouse => "project-warehouse",
            RoomType::CommunicationHub => "communication-hub",
            RoomType::SystemStatus => "system-status",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            RoomType::ServerRoom => "Server Room",
            RoomType::DatabaseRoom => "Database Room",
            RoomType::CodeLaboratory => "Code Laboratory",
            RoomType::ProjectWarehouse => "Project Warehouse",
            RoomType::CommunicationHub => "Communication Hub",
            RoomType::SystemStatus => "System Status",
        }
    }
}

impl TryFrom<i64> for RoomType {
    type Error = RenderError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_index(value).ok_or(RenderError::InvalidRoomType(value))
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl Serialize for RoomType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

/// Accepted wire forms: the numeric selector or the kebab-case id.
#[derive(Deserialize)]
#[serde(untagged)]
enum RoomTypeRepr {
    Index(i64),
    Id(String),
}

impl<'de> Deserialize<'de> for RoomType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RoomTypeRepr::deserialize(deserializer)? {
            RoomTypeRepr::Index(index) => RoomType::try_from(index).map_err(D::Error::custom),
            RoomTypeRepr::Id(id) => RoomType::from_id(&id)
                .ok_or_else(|| D::Error::custom(format!("unknown room id '{id}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_match_enumeration_order() {
        for (i, room) in RoomType::ALL.iter().enumerate() {
            assert_eq!(room.index() as usize, i);
            assert_eq!(room.shader_selector(), i as i32);
            assert_eq!(RoomType::from_index(i as i64), Some(*room));
        }
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        assert_eq!(RoomType::from_index(6), None);
        assert_eq!(RoomType::from_index(-1), None);
        assert_eq!(
            RoomType::try_from(42),
            Err(RenderError::InvalidRoomType(42))
        );
    }

    #[test]
    fn ids_round_trip() {
        for room in RoomType::ALL {
            assert_eq!(RoomType::from_id(room.id()), Some(room));
        }
        assert_eq!(RoomType::from_id("attic"), None);
    }

    #[test]
    fn deserializes_from_number_or_id() {
        let by_index: RoomType = serde_json::from_str("4").unwrap();
        let by_id: RoomType = serde_json::from_str("\"communication-hub\"").unwrap();
        assert_eq!(by_index, RoomType::CommunicationHub);
        assert_eq!(by_id, RoomType::CommunicationHub);

        assert!(serde_json::from_str::<RoomType>("9").is_err());
        assert!(serde_json::from_str::<RoomType>("\"basement\"").is_err());
    }

    #[test]
    fn serializes_as_id() {
        let json = serde_json::to_string(&RoomType::SystemStatus).unwrap();
        assert_eq!(json, "\"system-status\"");
    }
}
