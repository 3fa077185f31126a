use crate::animation::GestureSequence;
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WordCategory {
    Animals,
    Sports,
    Jobs,
    Emotions,
    Food,
}

impl WordCategory {
    pub const ALL: [WordCategory; 5] = [
        Self::Animals,
        Self::Sports,
        Self::Jobs,
        Self::Emotions,
        Self::Food,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Animals => "animals",
            Self::Sports => "sports",
            Self::Jobs => "jobs",
            Self::Emotions => "emotions",
            Self::Food => "food",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct WordEntry {
    pub word: &'static str,
    pub hint: &'static str,
    pub category: WordCategory,
    pub gestures: &'static [&'static str],
}

impl WordEntry {
    const fn new(
        category: WordCategory,
        word: &'static str,
        hint: &'static str,
        gestures: &'static [&'static str],
    ) -> Self {
        Self {
            word,
            hint,
            category,
            gestures,
        }
    }

    /// The pantomime for this word; `None` for an entry without gestures,
    /// which the figure plays as plain idling.
    pub fn sequence(&self) -> Option<GestureSequence> {
        GestureSequence::new(self.gestures.iter().copied()).ok()
    }
}

use WordCategory::{Animals, Emotions, Food, Jobs, Sports};

const BUILTIN: &[WordEntry] = &[
    WordEntry::new(Animals, "토끼", "깡충깡충 뛰는 동물", &["hop", "scratch", "eat"]),
    WordEntry::new(Animals, "코끼리", "코가 긴 동물", &["trunk-swing", "stomp", "trumpet"]),
    WordEntry::new(Animals, "원숭이", "나무를 잘 타는 동물", &["scratch", "jump", "climb"]),
    WordEntry::new(Animals, "펭귄", "남극에 사는 새", &["waddle", "flap", "dive"]),
    WordEntry::new(Animals, "강아지", "충성스러운 반려동물", &["tail-wag", "paw", "run"]),
    WordEntry::new(Animals, "고양이", "야옹하는 동물", &["stretch", "paw", "yawn"]),
    WordEntry::new(Animals, "사자", "백수의 왕", &["roar", "scratch", "stomp"]),
    WordEntry::new(Animals, "곰", "겨울잠을 자는 동물", &["stomp", "scratch", "roar"]),
    WordEntry::new(Animals, "캥거루", "주머니가 있는 동물", &["hop", "jab", "jump"]),
    WordEntry::new(Animals, "물고기", "물 속에 사는 생물", &["swim", "flap", "dive"]),
    WordEntry::new(Sports, "축구", "발로 공을 차는 운동", &["kick", "run", "celebrate"]),
    WordEntry::new(Sports, "농구", "골대에 공을 넣는 운동", &["dribble", "shoot", "jump"]),
    WordEntry::new(Sports, "야구", "배트로 공을 치는 운동", &["swing", "throw", "celebrate"]),
    WordEntry::new(Sports, "수영", "물에서 하는 운동", &["swim", "dive", "stretch"]),
    WordEntry::new(Sports, "테니스", "라켓으로 공을 치는 운동", &["serve", "swing", "run"]),
    WordEntry::new(Sports, "골프", "클럽으로 공을 치는 운동", &["swing", "point", "celebrate"]),
    WordEntry::new(Sports, "배구", "네트 너머로 공을 치는 운동", &["spike", "block", "jump"]),
    WordEntry::new(Sports, "권투", "주먹으로 싸우는 운동", &["jab", "uppercut", "punch"]),
    WordEntry::new(Sports, "태권도", "한국 전통 무술", &["kick", "punch", "block"]),
    WordEntry::new(Sports, "스키", "눈 위를 타는 운동", &["glide", "jump", "celebrate"]),
    WordEntry::new(Jobs, "의사", "환자를 치료하는 사람", &["examine", "write", "think"]),
    WordEntry::new(Jobs, "선생님", "학생을 가르치는 사람", &["write", "point", "think"]),
    WordEntry::new(Jobs, "요리사", "음식을 만드는 사람", &["chop", "stir", "eat"]),
    WordEntry::new(Jobs, "소방관", "불을 끄는 사람", &["spray", "climb", "run"]),
    WordEntry::new(Jobs, "경찰", "범죄를 막는 사람", &["point", "run", "wave"]),
    WordEntry::new(Jobs, "가수", "노래를 부르는 사람", &["sing", "dance", "bow"]),
    WordEntry::new(Jobs, "화가", "그림을 그리는 사람", &["paint", "think", "bow"]),
    WordEntry::new(Jobs, "조종사", "비행기를 운전하는 사람", &["steer", "point", "wave"]),
    WordEntry::new(Jobs, "프로그래머", "코드를 작성하는 사람", &["type", "think", "celebrate"]),
    WordEntry::new(Jobs, "건축가", "건물을 설계하는 사람", &["write", "point", "think"]),
    WordEntry::new(Emotions, "행복", "기분이 좋은 상태", &["clap", "jump", "dance"]),
    WordEntry::new(Emotions, "슬픔", "눈물이 나는 상태", &["cry", "bow", "think"]),
    WordEntry::new(Emotions, "화남", "짜증나는 상태", &["stomp", "roar", "punch"]),
    WordEntry::new(Emotions, "놀람", "갑자기 깜짝 놀란 상태", &["jump", "block", "run"]),
    WordEntry::new(Emotions, "피곤", "잠이 오는 상태", &["yawn", "stretch", "cry"]),
    WordEntry::new(Emotions, "춤", "음악에 맞춰 몸을 움직이기", &["dance", "spin", "clap"]),
    WordEntry::new(Emotions, "박수", "손뼉을 치기", &["clap", "cheer", "celebrate"]),
    WordEntry::new(Emotions, "달리기", "빠르게 이동하기", &["run", "sprint", "celebrate"]),
    WordEntry::new(Emotions, "점프", "높이 뛰어오르기", &["jump", "hop", "cheer"]),
    WordEntry::new(Emotions, "생각", "머리를 굴리기", &["think", "scratch", "point"]),
    WordEntry::new(Food, "피자", "이탈리아 음식", &["cut", "eat", "stretch"]),
    WordEntry::new(Food, "햄버거", "패티가 들어간 음식", &["bite", "eat", "celebrate"]),
    WordEntry::new(Food, "라면", "끓여먹는 면 요리", &["slurp", "eat", "stir"]),
    WordEntry::new(Food, "치킨", "튀긴 닭고기", &["bite", "lick", "flap"]),
    WordEntry::new(Food, "김밥", "김으로 싼 한국 음식", &["chop", "cut", "eat"]),
    WordEntry::new(Food, "아이스크림", "차가운 디저트", &["lick", "bite", "cheer"]),
    WordEntry::new(Food, "스파게티", "긴 면 요리", &["twirl", "slurp", "eat"]),
    WordEntry::new(Food, "스테이크", "고기를 구운 요리", &["cut", "bite", "eat"]),
    WordEntry::new(Food, "초밥", "일본 음식", &["chop", "eat", "celebrate"]),
    WordEntry::new(Food, "도넛", "구멍 뚫린 빵", &["bite", "lick", "eat"]),
];

#[derive(Clone, Debug)]
pub struct WordBank {
    words: Vec<WordEntry>,
}

impl WordBank {
    pub fn builtin() -> Self {
        Self {
            words: BUILTIN.to_vec(),
        }
    }

    pub fn from_entries(words: Vec<WordEntry>) -> Self {
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    pub fn categories(&self) -> Vec<WordCategory> {
        WordCategory::ALL
            .into_iter()
            .filter(|c| self.words.iter().any(|w| w.category == *c))
            .collect()
    }

    pub fn find(&self, word: &str) -> Option<&WordEntry> {
        self.words.iter().find(|w| w.word == word)
    }

    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&WordEntry> {
        self.words.choose(rng)
    }

    /// Random word from `category`, or from the whole bank when the category
    /// has no entries.
    pub fn random_word_in<R: Rng + ?Sized>(
        &self,
        category: WordCategory,
        rng: &mut R,
    ) -> Option<&WordEntry> {
        let pool: Vec<&WordEntry> = self
            .words
            .iter()
            .filter(|w| w.category == category)
            .collect();
        match pool.choose(rng) {
            Some(w) => Some(*w),
            None => self.random_word(rng),
        }
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self::builtin()
    }
}
