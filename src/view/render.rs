//! Text rendering of the tag surfaces and the organ detail panel.

use crate::models::{OrganRecord, TagHierarchy};
use crate::view::Selection;

const EXPANDED: char = '▾';
const COLLAPSED: char = '▸';
const ACTIVE: char = '●';

/// Render the admin tag-editor listing: all primary tags, then the secondary
/// tags of the expanded category when one is selected.
pub fn editor_list(tags: &TagHierarchy, selection: &Selection) -> String {
    let mut output = String::from("一级标签\n");
    if tags.primary.is_empty() {
        output.push_str("（暂无标签）\n");
    }
    for tag in &tags.primary {
        output.push_str("- ");
        output.push_str(tag);
        output.push('\n');
    }

    if let Some(primary) = selection.primary() {
        output.push_str(&format!("二级标签（{primary}）\n"));
        let items = tags.secondary_of(primary);
        if items.is_empty() {
            output.push_str("（暂无标签）\n");
        }
        for tag in items {
            output.push_str("- ");
            output.push_str(tag);
            output.push('\n');
        }
    }

    output
}

/// Render the primary-category select control with its placeholder row. The
/// expanded category is marked as the current choice.
pub fn primary_select(tags: &TagHierarchy, selection: &Selection) -> String {
    let mut output = String::from("选择一级标签\n");
    for tag in &tags.primary {
        if selection.primary() == Some(tag.as_str()) {
            output.push_str(&format!("{ACTIVE} {tag}\n"));
        } else {
            output.push_str(&format!("  {tag}\n"));
        }
    }
    output
}

/// Render the site navigation menu. Each primary category is a top-level
/// entry; the expanded one shows its dropdown of secondary items, with the
/// active item marked.
///
/// Example output:
/// ```text
/// 心脏 ▾
/// ├── ● 心悸
/// └── 胸闷
/// 肝脏 ▸
/// ```
pub fn nav_menu(tags: &TagHierarchy, selection: &Selection) -> String {
    let mut output = String::new();
    for primary in &tags.primary {
        let expanded = selection.primary() == Some(primary.as_str());
        output.push_str(primary);
        output.push(' ');
        output.push(if expanded { EXPANDED } else { COLLAPSED });
        output.push('\n');

        if !expanded {
            continue;
        }
        let items = tags.secondary_of(primary);
        for (i, item) in items.iter().enumerate() {
            let branch = if i == items.len() - 1 {
                "└── "
            } else {
                "├── "
            };
            output.push_str(branch);
            if selection.secondary() == Some(item.as_str()) {
                output.push(ACTIVE);
                output.push(' ');
            }
            output.push_str(item);
            output.push('\n');
        }
    }
    output
}

/// Render the organ detail panel for a resolved content record.
///
/// Section order matches the site's panel: title, symptoms, diagnosis,
/// disease cards, treatment, advice. The output is complete the moment this
/// returns; there is no staged reveal.
pub fn organ_panel(name: &str, record: &OrganRecord) -> String {
    let mut output = format!("{name}相关信息\n\n常见症状\n");
    for symptom in &record.symptoms {
        output.push_str("- ");
        output.push_str(symptom);
        output.push('\n');
    }

    output.push_str("\n中医诊断\n");
    output.push_str(&record.diagnosis);
    output.push('\n');

    output.push_str("\n常见疾病\n");
    for disease in &record.diseases {
        output.push_str(&format!(
            "{}\n  证型：{}\n  症状：{}\n  治疗：{}\n",
            disease.name,
            disease.kind,
            disease.symptoms,
            disease.treatment.replace('\n', "\n        ")
        ));
    }

    output.push_str("\n推荐治疗\n");
    output.push_str(&record.treatment);
    output.push('\n');

    output.push_str("\n养生建议\n");
    for advice in &record.advice {
        output.push_str("- ");
        output.push_str(advice);
        output.push('\n');
    }

    output
}
