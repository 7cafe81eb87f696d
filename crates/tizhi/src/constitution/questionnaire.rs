//! The fixed 30-item constitution questionnaire (simplified CCMQ).
//!
//! Items are grouped in contiguous blocks per constitution, in [`ConstitutionType::ALL`] order.
//! Each answer is a frequency rating from 1 (没有) to 5 (总是).

use serde::Serialize;

use super::types::ConstitutionType;

pub const QUESTION_COUNT: usize = 30;
pub const ANSWER_MIN: i32 = 1;
pub const ANSWER_MAX: i32 = 5;

/// Labels for the five answer ratings, indexed by `rating - 1`.
pub const ANSWER_LABELS: [&str; 5] = ["没有", "很少", "有时", "经常", "总是"];

/// One questionnaire item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub number: u8,
    pub content: &'static str,
    pub constitution_type: ConstitutionType,
}

const fn question(
    number: u8,
    content: &'static str,
    constitution_type: ConstitutionType,
) -> Question {
    Question {
        number,
        content,
        constitution_type,
    }
}

use ConstitutionType::*;

pub static QUESTIONS: [Question; QUESTION_COUNT] = [
    question(1, "您精力充沛吗？", Peace),
    question(2, "您说话声音低弱无力吗？", Peace),
    question(3, "您容易疲乏吗？", Peace),
    question(4, "您面色晦暗或容易出现褐斑吗？", Peace),
    question(5, "您容易疲乏吗？", QiDeficiency),
    question(6, "您容易气短（呼吸短促，接不上气）吗？", QiDeficiency),
    question(7, "您比一般人容易感冒吗？", QiDeficiency),
    question(8, "您喜欢安静、不喜欢说话吗？", QiDeficiency),
    question(9, "您手脚发凉吗？", YangDeficiency),
    question(10, "您胃、胳膊、膝盖怕冷吗？", YangDeficiency),
    question(11, "您比一般人怕冷吗？", YangDeficiency),
    question(12, "您吃凉东西会感到不舒服或怕吃凉的吗？", YangDeficiency),
    question(13, "您感到口干咽燥、总想喝水吗？", YinDeficiency),
    question(14, "您手心脚心发热吗？", YinDeficiency),
    question(15, "您皮肤或口唇干吗？", YinDeficiency),
    question(16, "您便秘或大便干燥吗？", YinDeficiency),
    question(17, "您感到胸闷或腹部胀满吗？", PhlegmDamp),
    question(18, "您感到身体沉重不轻松或不爽快吗？", PhlegmDamp),
    question(19, "您腹部肥满松软吗？", PhlegmDamp),
    question(20, "您面部或鼻部有油腻感或者油亮发光吗？", DampHeat),
    question(21, "您容易生痤疮或疮疖吗？", DampHeat),
    question(22, "您感到口苦或嘴里有异味吗？", DampHeat),
    question(23, "您的皮肤在不知不觉中会出现青紫瘀斑吗？", BloodStasis),
    question(24, "您的两颧部有细微红丝吗？", BloodStasis),
    question(25, "您身体上有哪里疼痛，而且疼痛部位固定吗？", BloodStasis),
    question(26, "您感到闷闷不乐、情绪低沉吗？", QiDepression),
    question(27, "您容易精神紧张、焦虑不安吗？", QiDepression),
    question(28, "您无缘无故叹气吗？", QiDepression),
    question(29, "您没有感冒也会打喷嚏吗？", Special),
    question(30, "您没有感冒也会鼻塞、流鼻涕吗？", Special),
];

/// Constitution scored by the 1-based question `number`.
pub fn constitution_for_question(number: usize) -> Option<ConstitutionType> {
    number
        .checked_sub(1)
        .and_then(|index| QUESTIONS.get(index))
        .map(|question| question.constitution_type)
}

/// Question numbers belonging to one constitution, ascending.
pub fn questions_for(kind: ConstitutionType) -> impl Iterator<Item = u8> {
    QUESTIONS
        .iter()
        .filter(move |question| question.constitution_type == kind)
        .map(|question| question.number)
}

pub fn answer_label(rating: i32) -> Option<&'static str> {
    if (ANSWER_MIN..=ANSWER_MAX).contains(&rating) {
        ANSWER_LABELS.get((rating - ANSWER_MIN) as usize).copied()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_sequential() {
        for (index, question) in QUESTIONS.iter().enumerate() {
            assert_eq!(usize::from(question.number), index + 1);
        }
    }

    #[test]
    fn blocks_match_declared_question_counts() {
        for kind in ConstitutionType::ALL {
            let numbers: Vec<u8> = questions_for(kind).collect();
            assert_eq!(numbers.len(), kind.question_count(), "{kind}");
            assert!(numbers.windows(2).all(|pair| pair[1] == pair[0] + 1));
        }
    }

    #[test]
    fn maps_block_boundaries() {
        assert_eq!(constitution_for_question(0), None);
        assert_eq!(constitution_for_question(4), Some(Peace));
        assert_eq!(constitution_for_question(9), Some(YangDeficiency));
        assert_eq!(constitution_for_question(17), Some(PhlegmDamp));
        assert_eq!(constitution_for_question(30), Some(Special));
        assert_eq!(constitution_for_question(31), None);
    }

    #[test]
    fn labels_only_cover_the_rating_scale() {
        assert_eq!(answer_label(1), Some("没有"));
        assert_eq!(answer_label(5), Some("总是"));
        assert_eq!(answer_label(0), None);
        assert_eq!(answer_label(6), None);
    }
}
