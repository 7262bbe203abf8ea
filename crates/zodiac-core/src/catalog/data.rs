use super::{Element, ElementRelation, Localized, LuckyColor, ZodiacFortune, ZodiacSign};
use ZodiacSign::*;

const fn l(ko: &'static str, en: &'static str) -> Localized {
    Localized::new(ko, en)
}

const fn color(ko: &'static str, en: &'static str, hex: &'static str) -> LuckyColor {
    LuckyColor {
        name: Localized::new(ko, en),
        hex,
    }
}

/// Indexed by `ZodiacSign::index()`.
pub static CATALOG: [ZodiacFortune; 12] = [
    ZodiacFortune {
        sign: Rat,
        name: l("쥐", "Rat"),
        emoji: "🐭",
        element: Element::Water,
        element_relation: ElementRelation::Overcoming,
        element_description: l(
            "물이 불을 끄는 해. 부딪히기보다 흐름을 타면 길이 열립니다.",
            "Water meets fire this year. Flow around obstacles instead of clashing with them.",
        ),
        lucky_colors: &[color("파랑", "Blue", "#3b82f6"), color("검정", "Black", "#1f2937")],
        lucky_numbers: &[1, 6],
        lucky_direction: l("북쪽", "North"),
        good_match: &[Dragon, Monkey, Ox],
        bad_match: &[Horse, Sheep],
        advice_dont: l("성급한 투자와 말다툼", "Hasty investments and arguments"),
        advice_do: l("꾸준한 저축과 건강 관리", "Steady saving and looking after your health"),
        quote: [
            l("조용히 준비한 자에게", "To those who prepare quietly,"),
            l("기회는 반드시 찾아옵니다", "opportunity always arrives"),
        ],
    },
    ZodiacFortune {
        sign: Ox,
        name: l("소", "Ox"),
        emoji: "🐮",
        element: Element::Earth,
        element_relation: ElementRelation::Generating,
        element_description: l(
            "불이 흙을 살리는 해. 그동안의 노력이 단단한 결실로 돌아옵니다.",
            "Fire nourishes earth. Your steady effort hardens into real results.",
        ),
        lucky_colors: &[color("노랑", "Yellow", "#facc15"), color("갈색", "Brown", "#92400e")],
        lucky_numbers: &[5, 10],
        lucky_direction: l("북동쪽", "Northeast"),
        good_match: &[Snake, Rooster, Rat],
        bad_match: &[Sheep, Horse],
        advice_dont: l("고집 부리기", "Stubbornness"),
        advice_do: l("새로운 배움에 도전", "Trying something new to learn"),
        quote: [
            l("한 걸음씩 걸어온 길이", "Every step you have taken"),
            l("올해 큰 길이 됩니다", "becomes a highway this year"),
        ],
    },
    ZodiacFortune {
        sign: Tiger,
        name: l("호랑이", "Tiger"),
        emoji: "🐯",
        element: Element::Wood,
        element_relation: ElementRelation::Generating,
        element_description: l(
            "나무가 불을 키우는 해. 당신의 열정이 주변을 밝힙니다.",
            "Wood feeds fire. Your passion lights up everyone around you.",
        ),
        lucky_colors: &[color("초록", "Green", "#22c55e"), color("빨강", "Red", "#ef4444")],
        lucky_numbers: &[3, 8],
        lucky_direction: l("동북쪽", "East-northeast"),
        good_match: &[Horse, Dog, Pig],
        bad_match: &[Monkey, Snake],
        advice_dont: l("혼자 모든 것을 짊어지기", "Carrying everything alone"),
        advice_do: l("동료와 함께 목표 세우기", "Setting goals together with others"),
        quote: [
            l("타오르는 용기가", "Your blazing courage"),
            l("새로운 문을 엽니다", "opens new doors"),
        ],
    },
    ZodiacFortune {
        sign: Rabbit,
        name: l("토끼", "Rabbit"),
        emoji: "🐰",
        element: Element::Wood,
        element_relation: ElementRelation::Generating,
        element_description: l(
            "나무가 불을 돕는 해. 베푼 만큼 인복이 따릅니다.",
            "Wood helps fire. The kindness you give comes back as good company.",
        ),
        lucky_colors: &[color("연두", "Lime", "#84cc16"), color("분홍", "Pink", "#f472b6")],
        lucky_numbers: &[3, 4],
        lucky_direction: l("동쪽", "East"),
        good_match: &[Sheep, Pig, Dog],
        bad_match: &[Rooster, Dragon],
        advice_dont: l("남의 말에 흔들리기", "Being swayed by gossip"),
        advice_do: l("나만의 속도 지키기", "Keeping your own pace"),
        quote: [
            l("부드러운 마음이", "A gentle heart"),
            l("가장 강한 힘이 됩니다", "becomes the greatest strength"),
        ],
    },
    ZodiacFortune {
        sign: Dragon,
        name: l("용", "Dragon"),
        emoji: "🐲",
        element: Element::Earth,
        element_relation: ElementRelation::Generating,
        element_description: l(
            "불이 흙을 데우는 해. 큰 뜻을 펼치기 좋은 때입니다.",
            "Fire warms earth. A fine year to pursue big ambitions.",
        ),
        lucky_colors: &[color("금색", "Gold", "#eab308"), color("보라", "Purple", "#8b5cf6")],
        lucky_numbers: &[1, 7],
        lucky_direction: l("동남쪽", "East-southeast"),
        good_match: &[Rat, Monkey, Rooster],
        bad_match: &[Dog, Rabbit],
        advice_dont: l("지나친 자신감", "Overconfidence"),
        advice_do: l("주변의 조언 듣기", "Listening to advice"),
        quote: [
            l("높이 나는 용처럼", "Like a dragon soaring high,"),
            l("꿈을 크게 그리세요", "dream big"),
        ],
    },
    ZodiacFortune {
        sign: Snake,
        name: l("뱀", "Snake"),
        emoji: "🐍",
        element: Element::Fire,
        element_relation: ElementRelation::Same,
        element_description: l(
            "같은 불의 기운이 만나는 해. 직감이 날카로워집니다.",
            "Fire meets fire. Your intuition is sharper than ever.",
        ),
        lucky_colors: &[color("주황", "Orange", "#f97316"), color("흰색", "White", "#f9fafb")],
        lucky_numbers: &[2, 9],
        lucky_direction: l("남동쪽", "South-southeast"),
        good_match: &[Ox, Rooster, Monkey],
        bad_match: &[Pig, Tiger],
        advice_dont: l("속마음 숨기기", "Hiding your true feelings"),
        advice_do: l("직감을 믿고 결단하기", "Trusting your instincts and deciding"),
        quote: [
            l("허물을 벗는 순간", "The moment you shed your skin"),
            l("새로운 내가 시작됩니다", "a new you begins"),
        ],
    },
    ZodiacFortune {
        sign: Horse,
        name: l("말", "Horse"),
        emoji: "🐴",
        element: Element::Fire,
        element_relation: ElementRelation::Amplified,
        element_description: l(
            "붉은 말의 해, 바로 당신의 해! 불의 기운이 극대화됩니다.",
            "The Red Horse year is your year! Fire energy is at its peak.",
        ),
        lucky_colors: &[color("빨강", "Red", "#dc2626"), color("금색", "Gold", "#f59e0b")],
        lucky_numbers: &[2, 7],
        lucky_direction: l("남쪽", "South"),
        good_match: &[Tiger, Dog, Sheep],
        bad_match: &[Rat, Ox],
        advice_dont: l("무리한 질주", "Running yourself ragged"),
        advice_do: l("쉼표를 찍으며 달리기", "Pacing yourself with rests"),
        quote: [
            l("바람을 가르는 말처럼", "Like a horse cutting through the wind,"),
            l("거침없이 달려가세요", "run without hesitation"),
        ],
    },
    ZodiacFortune {
        sign: Sheep,
        name: l("양", "Sheep"),
        emoji: "🐑",
        element: Element::Earth,
        element_relation: ElementRelation::Generating,
        element_description: l(
            "불이 흙을 북돋는 해. 따뜻한 인연이 찾아옵니다.",
            "Fire enriches earth. Warm connections come your way.",
        ),
        lucky_colors: &[color("베이지", "Beige", "#d6c7a1"), color("하늘", "Sky", "#7dd3fc")],
        lucky_numbers: &[4, 9],
        lucky_direction: l("남서쪽", "South-southwest"),
        good_match: &[Rabbit, Pig, Horse],
        bad_match: &[Ox, Rat],
        advice_dont: l("걱정을 키우기", "Letting worries grow"),
        advice_do: l("감사 표현하기", "Expressing gratitude"),
        quote: [
            l("함께 걷는 길에", "On the road walked together"),
            l("행복이 피어납니다", "happiness blooms"),
        ],
    },
    ZodiacFortune {
        sign: Monkey,
        name: l("원숭이", "Monkey"),
        emoji: "🐵",
        element: Element::Metal,
        element_relation: ElementRelation::Overcoming,
        element_description: l(
            "불이 쇠를 녹이는 해. 유연하게 변화에 적응하세요.",
            "Fire melts metal. Adapt to change with flexibility.",
        ),
        lucky_colors: &[color("흰색", "White", "#f3f4f6"), color("은색", "Silver", "#9ca3af")],
        lucky_numbers: &[4, 9],
        lucky_direction: l("서남쪽", "West-southwest"),
        good_match: &[Rat, Dragon, Snake],
        bad_match: &[Tiger, Pig],
        advice_dont: l("잔꾀로 지름길 찾기", "Clever shortcuts"),
        advice_do: l("정공법으로 승부하기", "Winning the honest way"),
        quote: [
            l("재치와 지혜로", "With wit and wisdom"),
            l("위기를 기회로 바꾸세요", "turn crisis into chance"),
        ],
    },
    ZodiacFortune {
        sign: Rooster,
        name: l("닭", "Rooster"),
        emoji: "🐔",
        element: Element::Metal,
        element_relation: ElementRelation::Overcoming,
        element_description: l(
            "불이 쇠를 단련하는 해. 시련이 당신을 빛나게 합니다.",
            "Fire tempers metal. Trials will make you shine.",
        ),
        lucky_colors: &[color("금색", "Gold", "#fbbf24"), color("흰색", "White", "#ffffff")],
        lucky_numbers: &[5, 8],
        lucky_direction: l("서쪽", "West"),
        good_match: &[Ox, Snake, Dragon],
        bad_match: &[Rabbit, Dog],
        advice_dont: l("완벽주의", "Perfectionism"),
        advice_do: l("작은 성취 축하하기", "Celebrating small wins"),
        quote: [
            l("새벽을 깨우는 목소리가", "The voice that wakes the dawn"),
            l("세상을 바꿉니다", "changes the world"),
        ],
    },
    ZodiacFortune {
        sign: Dog,
        name: l("개", "Dog"),
        emoji: "🐶",
        element: Element::Earth,
        element_relation: ElementRelation::Generating,
        element_description: l(
            "불이 흙을 든든히 하는 해. 믿음이 보답받습니다.",
            "Fire steadies earth. Your loyalty is rewarded.",
        ),
        lucky_colors: &[color("갈색", "Brown", "#a16207"), color("초록", "Green", "#16a34a")],
        lucky_numbers: &[3, 7],
        lucky_direction: l("서북쪽", "West-northwest"),
        good_match: &[Tiger, Horse, Rabbit],
        bad_match: &[Dragon, Rooster],
        advice_dont: l("남의 짐까지 떠안기", "Taking on everyone's burdens"),
        advice_do: l("나를 위한 시간 갖기", "Making time for yourself"),
        quote: [
            l("변치 않는 마음이", "An unchanging heart"),
            l("가장 큰 행운을 부릅니다", "calls the greatest luck"),
        ],
    },
    ZodiacFortune {
        sign: Pig,
        name: l("돼지", "Pig"),
        emoji: "🐷",
        element: Element::Water,
        element_relation: ElementRelation::Overcoming,
        element_description: l(
            "물과 불이 맞서는 해. 여유를 가지면 복이 굴러옵니다.",
            "Water faces fire. Stay relaxed and fortune rolls in.",
        ),
        lucky_colors: &[color("남색", "Navy", "#1e3a8a"), color("분홍", "Pink", "#fb7185")],
        lucky_numbers: &[1, 6],
        lucky_direction: l("북서쪽", "North-northwest"),
        good_match: &[Rabbit, Sheep, Tiger],
        bad_match: &[Snake, Monkey],
        advice_dont: l("충동구매", "Impulse buying"),
        advice_do: l("계획적인 소비", "Planned spending"),
        quote: [
            l("넉넉한 마음에", "Into a generous heart"),
            l("복이 가득 들어옵니다", "fortune pours in"),
        ],
    },
];
