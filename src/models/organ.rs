use serde::{Deserialize, Serialize};

/// Static reference content for a named organ or body part.
///
/// Records live in [`crate::content`] as constant data; nothing mutates
/// them. Lookup never fails — unknown names resolve to
/// [`OrganRecord::fallback`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganRecord {
    /// Common symptoms, in presentation order.
    pub symptoms: Vec<String>,
    /// Free-text diagnosis according to traditional theory.
    pub diagnosis: String,
    /// Typical diseases with their pattern type and treatment.
    pub diseases: Vec<Disease>,
    /// Recommended treatment; may contain numbered sub-sections as plain text.
    pub treatment: String,
    /// Lifestyle advice, in presentation order.
    pub advice: Vec<String>,
}

/// One disease entry within an [`OrganRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disease {
    pub name: String,
    /// Pattern classification (证型), e.g. 虚证 or 实证.
    #[serde(rename = "type")]
    pub kind: String,
    pub symptoms: String,
    pub treatment: String,
}

impl OrganRecord {
    /// The generic record returned for names without dedicated content.
    ///
    /// The diagnosis embeds the queried name verbatim; everything else is
    /// the fixed placeholder content.
    pub fn fallback(name: &str) -> Self {
        Self {
            symptoms: vec!["暂无相关症状数据".to_string()],
            diagnosis: format!("{name}是人体重要器官，建议到专业中医医院进行详细诊断。"),
            diseases: vec![Disease {
                name: "暂无疾病数据".to_string(),
                kind: "待诊断".to_string(),
                symptoms: "具体症状需要医生诊断".to_string(),
                treatment: "建议到专业中医医院就诊".to_string(),
            }],
            treatment: "建议到专业中医医院进行详细诊断和治疗。".to_string(),
            advice: [
                "保持良好的生活习惯",
                "规律作息",
                "均衡饮食",
                "适量运动",
                "定期体检",
            ]
            .map(str::to_string)
            .to_vec(),
        }
    }
}
