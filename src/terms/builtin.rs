//! Built-in phrases used when no managed terms are available.

/// The fallback phrase list, in display order. Always enough for a card.
pub const BUILTIN_TERMS: [&str; 45] = [
    "がっちゃんこ",
    "一丁目一番地",
    "アグリー",
    "てっぺん",
    "いってこい",
    "ジャストアイデア",
    "ザギンでシースー",
    "旗を立てる",
    "コンセンサス",
    "イニシアチブ",
    "ペンディング",
    "交通整理",
    "そもそも論",
    "目線合わせ",
    "鉛筆なめなめ",
    "決め打ち",
    "ケツカッチン",
    "全員野球",
    "たたき台",
    "出たとこ勝負",
    "突貫工事",
    "腹落ち",
    "空中戦",
    "現場感",
    "ドロンする",
    "トントン",
    "肌感",
    "なるはや",
    "寝かせる",
    "シナジー",
    "正直ベース",
    "丸める",
    "えいや",
    "仁義を切る",
    "ダマでやる",
    "ざっくばらん",
    "ボールを持つ",
    "音頭をとる",
    "ポンチ絵",
    "よしなに",
    "決めの問題",
    "建て付け",
    "握る",
    "ペライチ",
    "ガラガラポン",
];
