//! Static organ reference content.
//!
//! One authoritative table keyed by organ/body-part name. The records are
//! constant data; [`lookup`] clones out of the table and never fails —
//! unknown names get [`OrganRecord::fallback`], whose diagnosis embeds the
//! queried name.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::{Disease, OrganRecord};

/// Resolve a name to its content record, falling back to the generic record
/// for names without dedicated content.
pub fn lookup(name: &str) -> OrganRecord {
    TABLE
        .get(name)
        .cloned()
        .unwrap_or_else(|| OrganRecord::fallback(name))
}

/// Whether dedicated content exists for `name`.
pub fn has_entry(name: &str) -> bool {
    TABLE.contains_key(name)
}

fn record(
    symptoms: &[&str],
    diagnosis: &str,
    diseases: Vec<Disease>,
    treatment: &str,
    advice: &[&str],
) -> OrganRecord {
    OrganRecord {
        symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
        diagnosis: diagnosis.to_string(),
        diseases,
        treatment: treatment.to_string(),
        advice: advice.iter().map(|s| s.to_string()).collect(),
    }
}

fn disease(name: &str, kind: &str, symptoms: &str, treatment: &str) -> Disease {
    Disease {
        name: name.to_string(),
        kind: kind.to_string(),
        symptoms: symptoms.to_string(),
        treatment: treatment.to_string(),
    }
}

static TABLE: LazyLock<HashMap<&'static str, OrganRecord>> = LazyLock::new(|| {
    let mut table = HashMap::new();

    table.insert(
        "左耳",
        record(
            &["耳鸣", "听力减退", "耳痛", "眩晕", "耳内胀满", "分泌物异常"],
            "中医认为耳为肾之窍，耳部疾病多与肾精亏虚、肝火上扰有关。耳鸣可分为实证和虚证，实证多因肝火上扰，虚证多因肾精不足。",
            vec![
                disease(
                    "耳鸣",
                    "虚证",
                    "耳内持续或间歇性鸣响，疲劳后加重",
                    "补肾养精，健脾益气。\n服用六味地黄丸、归脾丸等。",
                ),
                disease(
                    "中耳炎",
                    "实证",
                    "耳痛剧烈，耳内胀满，可能有发热",
                    "清热解毒，消炎止痛。\n服用银翘散、双黄连口服液等。",
                ),
            ],
            "1. 针灸治疗：\n- 取听宫、翳风、耳门等穴位\n- 配合太溪、太冲等补肾泻肝穴位\n\n2. 中药调理：\n- 肾虚型：六味地黄丸\n- 肝火型：知柏地黄丸\n- 气血虚型：补气养血汤",
            &[
                "保持作息规律，避免熬夜",
                "适当运动，增强体质",
                "控制音量，避免噪音环境",
                "保持耳道清洁，预防感染",
                "戒烟限酒，清淡饮食",
            ],
        ),
    );

    table.insert(
        "心脏",
        record(
            &["心悸", "胸闷", "气短", "失眠", "多汗", "心律不齐", "面色苍白"],
            "心主血脉，心神所居。心气虚弱会导致血运不畅，心神不宁。常见心血虚、心气虚、心阴虚等证型。",
            vec![
                disease(
                    "心悸",
                    "气虚证",
                    "心跳加快，气短乏力，自汗，疲劳",
                    "益气养心，调节心律。\n服用归脾汤、酸枣仁汤等。",
                ),
                disease(
                    "胸痹",
                    "血瘀证",
                    "胸痛，痛处固定，夜间加重",
                    "活血化瘀，通络止痛。\n服用血府逐瘀汤、丹参滴丸等。",
                ),
            ],
            "1. 中药调理：\n- 气虚型：服用归脾汤\n- 阴虚型：天王补心丹\n- 血虚型：养心汤\n\n2. 穴位按摩：\n- 内关、神门、心俞等穴位\n- 每日按摩2-3次，每次10分钟",
            &[
                "保持心情舒畅，避免情绪激动",
                "适量运动，避免过度劳累",
                "规律作息，保证充足睡眠",
                "清淡饮食，避免刺激性食物",
                "保持良好的生活习惯",
            ],
        ),
    );

    table.insert(
        "肝脏",
        record(
            &["胁肋胀痛", "情志不畅", "目赤", "头痛", "口苦", "烦躁易怒"],
            "肝主疏泄，藏血养筋。肝气郁结会导致气机不畅，情志不舒；肝血不足则会出现筋脉失养等症状。",
            vec![
                disease(
                    "肝郁气滞",
                    "气滞证",
                    "胁肋胀痛，情志不畅，脘腹胀满",
                    "疏肝解郁，理气和胃。\n服用柴胡疏肝散、逍遥散等。",
                ),
                disease(
                    "肝火上炎",
                    "实热证",
                    "头痛眩晕，目赤肿痛，口苦咽干",
                    "清肝泻火，平肝潜阳。\n服用龙胆泻肝汤、天麻钩藤饮等。",
                ),
            ],
            "1. 中药调理：\n- 疏肝解郁：柴胡疏肝散\n- 养血柔肝：逍遥丸\n\n2. 穴位保健：\n- 期门、太冲等穴位\n- 配合艾灸调理",
            &[
                "保持情志舒畅，避免暴怒",
                "规律作息，不要熬夜",
                "适当运动，促进气血运行",
                "饮食有节，少食辛辣",
            ],
        ),
    );

    table.insert(
        "肺",
        record(
            &["咳嗽", "气短", "胸闷", "痰多", "声音嘶哑", "易感冒"],
            "肺主气，司呼吸。肺气虚弱易导致卫外不固，感受外邪；痰湿内阻则气机不畅。",
            vec![
                disease(
                    "感冒",
                    "风寒证",
                    "恶寒发热，鼻塞流涕，咳嗽",
                    "疏风散寒，宣肺止咳。\n服用桑菊饮、银翘散等。",
                ),
                disease(
                    "肺虚",
                    "气虚证",
                    "气短乏力，声音低弱，易感冒",
                    "补肺益气，固表止汗。\n服用玉屏风散、生脉散等。",
                ),
            ],
            "1. 中药调理：\n- 补肺益气：玉屏风散\n- 止咳化痰：二陈汤\n\n2. 穴位保健：\n- 肺俞、定喘等穴位\n- 配合艾灸调理",
            &[
                "注意保暖，预防感冒",
                "适当运动，增强肺功能",
                "保持室内空气流通",
                "戒烟限酒，避免刺激",
            ],
        ),
    );

    table.insert(
        "胃",
        record(
            &["胃痛", "消化不良", "嗳气", "反酸", "食欲不振", "恶心呕吐"],
            "胃主受纳腐熟，和降为顺。胃气虚弱会导致消化功能减退，气机失和则会出现胃痛等症状。",
            vec![
                disease(
                    "胃痛",
                    "寒证",
                    "胃部疼痛，喜温喜按，得食则缓解",
                    "温中散寒，和胃止痛。\n服用良姜散、吴茱萸汤等。",
                ),
                disease(
                    "胃炎",
                    "热证",
                    "胃脘灼痛，口干口苦，大便干结",
                    "清胃降火，和中止痛。\n服用清胃散、竹叶石膏汤等。",
                ),
            ],
            "1. 中药调理：\n- 健脾和胃：香砂六君子汤\n- 消化不良：保和丸\n\n2. 穴位保健：\n- 中脘、足三里等穴位\n- 配合艾灸调理",
            &[
                "规律饮食，细嚼慢咽",
                "不要暴饮暴食",
                "避免过冷过热食物",
                "保持心情愉悦",
                "适当运动，促进消化",
            ],
        ),
    );

    table.insert(
        "眼睛",
        record(
            &["视力模糊", "眼睛干涩", "眼疲劳", "畏光", "眼红", "眼痒"],
            "中医认为眼睛为肝之窍，与肝的功能密切相关。眼部疾病多与肝血不足、肝火上炎有关。",
            vec![
                disease(
                    "干眼症",
                    "阴虚证",
                    "眼睛干涩、异物感、易疲劳",
                    "滋阴养肝，润目明目。\n服用杞菊地黄丸、知柏地黄丸等。",
                ),
                disease(
                    "结膜炎",
                    "风热证",
                    "眼红、痒痛、多泪",
                    "疏风清热，明目退翳。\n服用银翘散、蒺藜决明丸等。",
                ),
            ],
            "1. 中药调理：\n- 滋阴明目：杞菊地黄丸\n- 清肝明目：明目地黄丸\n\n2. 穴位按摩：\n- 攒竹、睛明、太阳等穴位\n- 每日按摩2-3次",
            &[
                "用眼卫生，经常眨眼",
                "注意用眼时间，每隔1小时休息10分钟",
                "保持良好的睡眠习惯",
                "多食用对眼睛有益的食物，如胡萝卜、蓝莓等",
                "避免长时间使用电子产品",
            ],
        ),
    );

    table.insert(
        "鼻子",
        record(
            &["鼻塞", "流涕", "打喷嚏", "鼻痒", "嗅觉减退", "鼻出血"],
            "中医认为鼻为肺之窍，鼻部疾病与肺的功能密切相关。常见肺气虚弱、风寒侵袭等证候。",
            vec![
                disease(
                    "过敏性鼻炎",
                    "肺卫不固证",
                    "喷嚏连连，清涕如水，鼻痒",
                    "补肺固表，祛风通窍。\n服用玉屏风散、辛夷清肺饮等。",
                ),
                disease(
                    "慢性鼻炎",
                    "肺气虚弱证",
                    "鼻塞时轻时重，嗅觉减退",
                    "温肺化饮，通窍止涕。\n服用苍耳子散、辛夷散等。",
                ),
            ],
            "1. 中药调理：\n- 补肺固表：玉屏风散\n- 通窍止涕：辛夷散\n\n2. 穴位按摩：\n- 迎香、上星等穴位\n- 配合蒸汽熏蒸",
            &[
                "保持室内空气清新",
                "避免接触过敏原",
                "适当运动，增强体质",
                "保暖防寒，预防感冒",
                "定期清洁鼻腔",
            ],
        ),
    );

    table.insert(
        "口腔",
        record(
            &["口腔溃疡", "牙龈出血", "口干", "口苦", "口臭", "味觉改变"],
            "中医认为口腔问题多与脾胃、心火有关。口腔溃疡多因心火上炎，口干多因阴虚火旺。",
            vec![
                disease(
                    "口腔溃疡",
                    "心火上炎证",
                    "口腔疼痛，溃疡表面发白，周围红肿",
                    "清心泻火，养阴生津。\n服用玄参地黄汤、黄连上清丸等。",
                ),
                disease(
                    "牙龈炎",
                    "胃火上炎证",
                    "牙龈红肿出血，刷牙疼痛",
                    "清胃泻火，凉血止血。\n服用银花泡腾片、牙痛消炎灵等。",
                ),
            ],
            "1. 中药调理：\n- 清热解毒：黄连上清丸\n- 养阴生津：西瓜霜\n\n2. 穴位按摩：\n- 合谷、内庭等穴位\n- 每日漱口3-4次",
            &[
                "保持口腔卫生，早晚刷牙",
                "定期洗牙，预防牙周病",
                "避免食用过烫过冷的食物",
                "戒烟限酒",
                "适当补充维生素C",
            ],
        ),
    );

    table
});
