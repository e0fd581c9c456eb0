use serde::{Deserialize, Deserializer};

use crate::models::{LessonOccupancy, LessonType, TeacherRef};

/// Exports write `null` for blank fields; treat it like a missing key.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One lesson as found in the schedules export, keyed by room id upstream.
#[derive(Debug, Deserialize)]
pub struct LessonRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub section: String,
    #[serde(default, rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name_en: String,
    #[serde(default)]
    pub name_kz: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub end_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub week_id: u8,
    #[serde(default)]
    pub teacher: Option<TeacherRecord>,
}

#[derive(Debug, Deserialize)]
pub struct TeacherRecord {
    #[serde(default)]
    pub id: serde_json::Value,
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_name_en: String,
}

impl TeacherRecord {
    fn id_string(&self) -> String {
        match &self.id {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

impl LessonRecord {
    pub fn into_occupancy(self, room_id: u32) -> LessonOccupancy {
        let teacher = self.teacher.map(|t| TeacherRef {
            id: t.id_string(),
            full_name: t.full_name_en,
        });

        LessonOccupancy {
            lesson_id: self.id,
            room_id,
            weekday: self.week_id,
            start_time: self.start_time,
            end_time: self.end_time,
            subject_code: self.code,
            section: self.section,
            subject_name: self.name_en,
            subject_name_kz: self.name_kz,
            lesson_type: LessonType::from(self.kind),
            teacher,
        }
    }
}
