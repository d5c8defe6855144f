// Bilingual seed lexicon for the default model. Each entry is trained as one
// document, so phrases contribute their bigrams as well.

pub const POSITIVE: &[&str] = &[
    "快乐", "开心", "幸福", "喜欢", "爱你", "温暖", "美好", "希望", "阳光", "微笑",
    "欢笑", "甜蜜", "拥抱", "自由", "梦想", "勇敢", "光明", "灿烂", "感谢", "珍惜",
    "陪伴", "相守", "永远在一起", "心动", "浪漫", "美丽", "快活", "欢喜", "满足", "安心",
    "晴天", "春天", "花开", "飞翔", "胜利", "骄傲", "热爱", "期待", "明天会更好", "笑容",
    "温柔", "可爱", "甜", "暖", "笑", "爱", "好", "乐", "喜", "美",
    "happy", "joy", "love", "smile", "sunshine", "hope", "dream", "free", "bright", "sweet",
    "together", "forever", "beautiful", "dance", "laugh", "shine", "alive", "wonderful",
    "good", "great", "fun", "warm", "glad", "lucky", "heaven", "kiss",
];

pub const NEGATIVE: &[&str] = &[
    "悲伤", "难过", "痛苦", "孤单", "寂寞", "眼泪", "哭泣", "伤心", "离开", "分手",
    "遗憾", "失去", "绝望", "黑暗", "心碎", "思念", "后悔", "冷漠", "破碎", "流泪",
    "告别", "再见", "忘记", "放弃", "无奈", "疲惫", "迷茫", "害怕", "孤独", "凄凉",
    "冰冷", "雨夜", "荒芜", "沉默", "憔悴", "苦涩", "折磨", "煎熬", "不再爱", "回不去",
    "伤", "痛", "泪", "哭", "苦", "悲", "愁", "恨", "冷", "死",
    "sad", "cry", "tears", "alone", "lonely", "pain", "hurt", "broken", "goodbye", "lost",
    "dark", "cold", "die", "fear", "regret", "sorrow", "empty", "miss", "gone", "hate",
    "bleed", "grief", "lie", "fall", "never",
];
