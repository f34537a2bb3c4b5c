use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Набор команд действия, у которого в конфигурации две формы:
/// плоский список (`["cmd", ...]`) или словарь по дисплейному серверу
/// (`{"X11": [...], "Wayland": [...]}`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionSet {
    Commands(Vec<String>),
    ByServer(BTreeMap<String, Vec<String>>),
}

impl Default for ActionSet {
    fn default() -> Self {
        ActionSet::Commands(Vec::new())
    }
}

impl ActionSet {
    /// Плоский список команд (пустой для формы по серверам)
    pub fn commands(&self) -> &[String] {
        match self {
            ActionSet::Commands(commands) => commands,
            ActionSet::ByServer(_) => &[],
        }
    }

    /// Команды для конкретного ключа сервера ("X11" / "Wayland")
    pub fn for_server(&self, server: &str) -> &[String] {
        match self {
            ActionSet::ByServer(by_server) => {
                by_server.get(server).map(Vec::as_slice).unwrap_or(&[])
            }
            ActionSet::Commands(_) => &[],
        }
    }

    pub fn has_by_server(&self) -> bool {
        matches!(self, ActionSet::ByServer(map) if !map.is_empty())
    }

    /// Задано ли хоть что-то: непустой список или непустой словарь
    pub fn is_configured(&self) -> bool {
        !self.commands().is_empty() || self.has_by_server()
    }
}

impl<'de> Deserialize<'de> for ActionSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ActionSetVisitor;

        impl<'de> Visitor<'de> for ActionSetVisitor {
            type Value = ActionSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a list of commands or a display-server map")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<ActionSet, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut commands = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(command) = seq.next_element::<String>()? {
                    commands.push(command);
                }
                Ok(ActionSet::Commands(commands))
            }

            fn visit_map<A>(self, mut map: A) -> Result<ActionSet, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut by_server = BTreeMap::new();
                while let Some((server, commands)) =
                    map.next_entry::<String, Option<Vec<String>>>()?
                {
                    by_server.insert(server, commands.unwrap_or_default());
                }
                Ok(ActionSet::ByServer(by_server))
            }

            // `"lock": null` равносильно отсутствию поля
            fn visit_unit<E>(self) -> Result<ActionSet, E>
            where
                E: de::Error,
            {
                Ok(ActionSet::default())
            }

            fn visit_none<E>(self) -> Result<ActionSet, E>
            where
                E: de::Error,
            {
                Ok(ActionSet::default())
            }
        }

        deserializer.deserialize_any(ActionSetVisitor)
    }
}

impl Serialize for ActionSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ActionSet::Commands(commands) if !commands.is_empty() => commands.serialize(serializer),
            ActionSet::ByServer(by_server) if !by_server.is_empty() => {
                let mut map = serializer.serialize_map(Some(by_server.len()))?;
                for (server, commands) in by_server {
                    map.serialize_entry(server, commands)?;
                }
                map.end()
            }
            _ => serializer.serialize_seq(Some(0))?.end(),
        }
    }
}
