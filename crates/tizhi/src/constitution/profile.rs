use serde::Serialize;

use super::types::ConstitutionType;

/// Static description of a constitution shown alongside a scored result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConstitutionProfile {
    #[serde(rename = "type")]
    pub kind: ConstitutionType,
    pub name: &'static str,
    pub description: &'static str,
    pub characteristics: Characteristics,
    pub regulation_principles: RegulationPrinciples,
    pub taboos: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Characteristics {
    pub overall: &'static [&'static str],
    pub mental: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegulationPrinciples {
    pub diet: &'static [&'static str],
    pub exercise: &'static [&'static str],
    pub lifestyle: &'static [&'static str],
    pub emotion: &'static [&'static str],
}

impl ConstitutionType {
    pub fn profile(self) -> &'static ConstitutionProfile {
        &PROFILES[self as usize]
    }
}

/// Profiles for every constitution, in declaration order.
pub fn all_profiles() -> &'static [ConstitutionProfile] {
    &PROFILES
}

static PROFILES: [ConstitutionProfile; 9] = [
    ConstitutionProfile {
        kind: ConstitutionType::Peace,
        name: "平和质",
        description: "阴阳气血调和，体态适中，面色红润，精力充沛",
        characteristics: Characteristics {
            overall: &[
                "体型匀称健壮",
                "面色、肤色润泽",
                "精力充沛，不易疲劳",
                "耐受寒热，睡眠良好",
                "胃纳佳，二便正常",
            ],
            mental: &["性格随和开朗"],
        },
        regulation_principles: RegulationPrinciples {
            diet: &["饮食有节，不要过饥过饱", "食物搭配要多样化"],
            exercise: &["适度运动，劳逸结合"],
            lifestyle: &["规律作息，避免熬夜"],
            emotion: &["保持心情舒畅"],
        },
        taboos: &["避免暴饮暴食", "避免长期偏食"],
    },
    ConstitutionProfile {
        kind: ConstitutionType::QiDeficiency,
        name: "气虚质",
        description: "元气不足，气息低弱，机体功能状态低下",
        characteristics: Characteristics {
            overall: &[
                "肌肉松软，容易疲劳",
                "面色苍白，目光少神",
                "气短懒言，容易出汗",
                "易感冒，尤其怕风",
            ],
            mental: &["性格内向，不喜冒险"],
        },
        regulation_principles: RegulationPrinciples {
            diet: &["宜吃补气健脾的食物", "忌吃破气耗气的食物"],
            exercise: &["温和运动为主，如散步、太极拳、八段锦"],
            lifestyle: &["避免过度劳累", "保证充足睡眠", "注意保暖，避免出汗受风"],
            emotion: &["保持心情愉快，避免过度思虑"],
        },
        taboos: &["忌剧烈运动", "忌过度用脑", "忌食寒凉"],
    },
    ConstitutionProfile {
        kind: ConstitutionType::YangDeficiency,
        name: "阳虚质",
        description: "阳气不足，身体失于温煦，畏寒怕冷",
        characteristics: Characteristics {
            overall: &[
                "肌肉松软，容易水肿",
                "面色发白，手足发凉",
                "怕冷喜热，精神不振",
                "易大便溏薄",
            ],
            mental: &["性格多沉静、内向"],
        },
        regulation_principles: RegulationPrinciples {
            diet: &["宜吃温补阳气的食物", "少吃生冷寒凉的食物"],
            exercise: &["适度运动，以身体发热为度，如慢跑、快走"],
            lifestyle: &["注意保暖，尤其是腰腹和脚部", "多晒太阳"],
            emotion: &["保持积极乐观的心态"],
        },
        taboos: &["忌食生冷", "避免长期受寒", "忌冷水澡"],
    },
    ConstitutionProfile {
        kind: ConstitutionType::YinDeficiency,
        name: "阴虚质",
        description: "阴液亏少，以干燥失润、虚热内扰为主要特征",
        characteristics: Characteristics {
            overall: &[
                "体形多偏瘦",
                "面色潮红，有烘热感",
                "口燥咽干，手足心热",
                "易心烦失眠，大便干燥",
            ],
            mental: &["性格急躁易怒，外向活泼"],
        },
        regulation_principles: RegulationPrinciples {
            diet: &["宜吃滋阴润燥的食物", "少吃辛辣燥热的食物"],
            exercise: &["中小强度的运动，避免剧烈运动，如游泳、瑜伽"],
            lifestyle: &["注意休息，避免熬夜", "保持室内适宜湿度", "多饮水"],
            emotion: &["学会调节情绪，避免动怒"],
        },
        taboos: &["忌辛辣燥热", "忌熬夜", "忌高温环境"],
    },
    ConstitutionProfile {
        kind: ConstitutionType::PhlegmDamp,
        name: "痰湿质",
        description: "水液内停而痰湿凝聚，以黏滞重浊为主要特征",
        characteristics: Characteristics {
            overall: &[
                "体型肥胖，腹部肥满松软",
                "面部皮肤油脂较多",
                "多汗且黏，胸闷痰多",
                "口黏腻或甜，身重不爽",
            ],
            mental: &["性格偏温和，稳重多谋"],
        },
        regulation_principles: RegulationPrinciples {
            diet: &["宜吃健脾利湿的食物", "少吃肥甘厚味的食物"],
            exercise: &["长期坚持有氧运动"],
            lifestyle: &["控制饮食量", "保持居住环境干燥", "保持大便通畅"],
            emotion: &["保持心情舒畅"],
        },
        taboos: &["忌甜腻肥厚", "忌少动久坐", "忌居住潮湿"],
    },
    ConstitutionProfile {
        kind: ConstitutionType::DampHeat,
        name: "湿热质",
        description: "湿热内蕴，以湿热内蕴为主要特征",
        characteristics: Characteristics {
            overall: &[
                "容易长痤疮、粉刺",
                "面垢油光，易口苦口干",
                "身重困倦，大便黏滞不畅",
                "小便短赤",
            ],
            mental: &["容易心烦急躁"],
        },
        regulation_principles: RegulationPrinciples {
            diet: &["宜吃清热利湿的食物", "少吃辛辣燥烈、大热大补的食物"],
            exercise: &["中等强度运动，如中长跑、游泳、爬山"],
            lifestyle: &["保持环境通风干燥", "避免熬夜", "注意个人卫生"],
            emotion: &["保持心态平和"],
        },
        taboos: &["忌辛辣油腻", "忌饮酒", "忌高温环境"],
    },
    ConstitutionProfile {
        kind: ConstitutionType::BloodStasis,
        name: "血瘀质",
        description: "血行不畅，以肤色晦黯、舌质紫黯为主要特征",
        characteristics: Characteristics {
            overall: &[
                "肤色晦黯，色素沉着",
                "容易出现瘀斑",
                "口唇黯淡或紫",
                "舌质黯淡或有瘀点",
            ],
            mental: &["性格心情烦闷，容易健忘"],
        },
        regulation_principles: RegulationPrinciples {
            diet: &["宜吃活血化瘀的食物", "少吃寒凉、收涩的食物"],
            exercise: &["适度运动，促进血液循环，如跑步、跳绳"],
            lifestyle: &["注意保暖，避免寒邪侵袭", "避免久坐"],
            emotion: &["保持心情愉悦，避免抑郁"],
        },
        taboos: &["忌寒凉收涩", "忌久坐不动", "忌受寒"],
    },
    ConstitutionProfile {
        kind: ConstitutionType::QiDepression,
        name: "气郁质",
        description: "气机郁滞，以神情抑郁、忧虑脆弱为主要特征",
        characteristics: Characteristics {
            overall: &[
                "表情多郁闷、不开心",
                "胸胁胀满，或走窜疼痛",
                "善太息，嗳气呃逆",
                "咽喉异物感",
            ],
            mental: &["性格内向不稳定，敏感多虑"],
        },
        regulation_principles: RegulationPrinciples {
            diet: &["宜吃疏肝理气的食物", "少吃生冷、油腻的食物"],
            exercise: &["增加户外运动，如踏青、登山、游泳"],
            lifestyle: &["多与人交流", "培养兴趣爱好", "保持规律作息"],
            emotion: &["学会疏解情绪，保持心情舒畅"],
        },
        taboos: &["忌思虑过度", "忌长期郁结", "忌独处"],
    },
    ConstitutionProfile {
        kind: ConstitutionType::Special,
        name: "特禀质",
        description: "先天失常，以生理缺陷、过敏反应等为主要特征",
        characteristics: Characteristics {
            overall: &[
                "容易过敏（花粉、食物、药物）",
                "不感冒也容易打喷嚏、流鼻涕",
                "容易患哮喘、荨麻疹等",
            ],
            mental: &["性格因情况而异"],
        },
        regulation_principles: RegulationPrinciples {
            diet: &["宜吃清淡、均衡的食物", "避免食用已知的过敏食物"],
            exercise: &["适度运动，增强体质，如散步、瑜伽"],
            lifestyle: &["避免接触过敏原", "保持室内清洁", "勤换洗衣物"],
            emotion: &["保持心态平和"],
        },
        taboos: &["忌接触过敏原", "忌食用过敏食物"],
    },
];
