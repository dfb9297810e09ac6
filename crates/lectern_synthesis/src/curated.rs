//! Curated corpus of fully authored chapters.
//!
//! Entries are matched on exact canonical book name and chapter and returned
//! verbatim. Text follows the King James Version.

/// One fully authored chapter.
#[derive(Debug)]
pub struct CuratedChapter {
    /// Canonical book name, as in the catalog.
    pub book: &'static str,
    /// Chapter number.
    pub chapter: u32,
    /// Verse texts, verse 1 first.
    pub verses: &'static [&'static str],
}

/// Finds the curated entry for a canonical book name and chapter.
#[must_use]
pub fn curated_chapter(book: &str, chapter: u32) -> Option<&'static CuratedChapter> {
    CURATED.iter().find(|c| c.book == book && c.chapter == chapter)
}

/// All curated entries.
#[must_use]
pub fn curated_chapters() -> &'static [CuratedChapter] {
    CURATED
}

const CURATED: &[CuratedChapter] = &[
    CuratedChapter {
        book: "genesis",
        chapter: 1,
        verses: &[
            "In the beginning God created the heaven and the earth.",
            "And the earth was without form, and void; and darkness was upon the face of the deep. And the Spirit of God moved upon the face of the waters.",
            "And God said, Let there be light: and there was light.",
            "And God saw the light, that it was good: and God divided the light from the darkness.",
            "And God called the light Day, and the darkness he called Night. And the evening and the morning were the first day.",
            "And God said, Let there be a firmament in the midst of the waters, and let it divide the waters from the waters.",
            "And God made the firmament, and divided the waters which were under the firmament from the waters which were above the firmament: and it was so.",
            "And God called the firmament Heaven. And the evening and the morning were the second day.",
            "And God said, Let the waters under the heaven be gathered together unto one place, and let the dry land appear: and it was so.",
            "And God called the dry land Earth; and the gathering together of the waters called he Seas: and God saw that it was good.",
            "And God said, Let the earth bring forth grass, the herb yielding seed, and the fruit tree yielding fruit after his kind, whose seed is in itself, upon the earth: and it was so.",
            "And the earth brought forth grass, and herb yielding seed after his kind, and the tree yielding fruit, whose seed was in itself, after his kind: and God saw that it was good.",
            "And the evening and the morning were the third day.",
            "And God said, Let there be lights in the firmament of the heaven to divide the day from the night; and let them be for signs, and for seasons, and for days, and years:",
            "And let them be for lights in the firmament of the heaven to give light upon the earth: and it was so.",
            "And God made two great lights; the greater light to rule the day, and the lesser light to rule the night: he made the stars also.",
            "And God set them in the firmament of the heaven to give light upon the earth,",
            "And to rule over the day and over the night, and to divide the light from the darkness: and God saw that it was good.",
            "And the evening and the morning were the fourth day.",
            "And God said, Let the waters bring forth abundantly the moving creature that hath life, and fowl that may fly above the earth in the open firmament of heaven.",
            "And God created great whales, and every living creature that moveth, which the waters brought forth abundantly, after their kind, and every winged fowl after his kind: and God saw that it was good.",
            "And God blessed them, saying, Be fruitful, and multiply, and fill the waters in the seas, and let fowl multiply in the earth.",
            "And the evening and the morning were the fifth day.",
            "And God said, Let the earth bring forth the living creature after his kind, cattle, and creeping thing, and beast of the earth after his kind: and it was so.",
            "And God made the beast of the earth after his kind, and cattle after their kind, and every thing that creepeth upon the earth after his kind: and God saw that it was good.",
            "And God said, Let us make man in our image, after our likeness: and let them have dominion over the fish of the sea, and over the fowl of the air, and over the cattle, and over all the earth, and over every creeping thing that creepeth upon the earth.",
            "So God created man in his own image, in the image of God created he him; male and female created he them.",
            "And God blessed them, and God said unto them, Be fruitful, and multiply, and replenish the earth, and subdue it: and have dominion over the fish of the sea, and over the fowl of the air, and over every living thing that moveth upon the earth.",
            "And God said, Behold, I have given you every herb bearing seed, which is upon the face of all the earth, and every tree, in the which is the fruit of a tree yielding seed; to you it shall be for meat.",
            "And to every beast of the earth, and to every fowl of the air, and to every thing that creepeth upon the earth, wherein there is life, I have given every green herb for meat: and it was so.",
            "And God saw every thing that he had made, and, behold, it was very good. And the evening and the morning were the sixth day.",
        ],
    },
    CuratedChapter {
        book: "psalms",
        chapter: 1,
        verses: &[
            "Blessed is the man that walketh not in the counsel of the ungodly, nor standeth in the way of sinners, nor sitteth in the seat of the scornful.",
            "But his delight is in the law of the LORD; and in his law doth he meditate day and night.",
            "And he shall be like a tree planted by the rivers of water, that bringeth forth his fruit in his season; his leaf also shall not wither; and whatsoever he doeth shall prosper.",
            "The ungodly are not so: but are like the chaff which the wind driveth away.",
            "Therefore the ungodly shall not stand in the judgment, nor sinners in the congregation of the righteous.",
            "For the LORD knoweth the way of the righteous: but the way of the ungodly shall perish.",
        ],
    },
    CuratedChapter {
        book: "psalms",
        chapter: 23,
        verses: &[
            "The LORD is my shepherd; I shall not want.",
            "He maketh me to lie down in green pastures: he leadeth me beside the still waters.",
            "He restoreth my soul: he leadeth me in the paths of righteousness for his name's sake.",
            "Yea, though I walk through the valley of the shadow of death, I will fear no evil: for thou art with me; thy rod and thy staff they comfort me.",
            "Thou preparest a table before me in the presence of mine enemies: thou anointest my head with oil; my cup runneth over.",
            "Surely goodness and mercy shall follow me all the days of my life: and I will dwell in the house of the LORD for ever.",
        ],
    },
    CuratedChapter {
        book: "psalms",
        chapter: 100,
        verses: &[
            "Make a joyful noise unto the LORD, all ye lands.",
            "Serve the LORD with gladness: come before his presence with singing.",
            "Know ye that the LORD he is God: it is he that hath made us, and not we ourselves; we are his people, and the sheep of his pasture.",
            "Enter into his gates with thanksgiving, and into his courts with praise: be thankful unto him, and bless his name.",
            "For the LORD is good; his mercy is everlasting; and his truth endureth to all generations.",
        ],
    },
    CuratedChapter {
        book: "psalms",
        chapter: 117,
        verses: &[
            "O praise the LORD, all ye nations: praise him, all ye people.",
            "For his merciful kindness is great toward us: and the truth of the LORD endureth for ever. Praise ye the LORD.",
        ],
    },
    CuratedChapter {
        book: "psalms",
        chapter: 121,
        verses: &[
            "I will lift up mine eyes unto the hills, from whence cometh my help.",
            "My help cometh from the LORD, which made heaven and earth.",
            "He will not suffer thy foot to be moved: he that keepeth thee will not slumber.",
            "Behold, he that keepeth Israel shall neither slumber nor sleep.",
            "The LORD is thy keeper: the LORD is thy shade upon thy right hand.",
            "The sun shall not smite thee by day, nor the moon by night.",
            "The LORD shall preserve thee from all evil: he shall preserve thy soul.",
            "The LORD shall preserve thy going out and thy coming in from this time forth, and even for evermore.",
        ],
    },
    CuratedChapter {
        book: "1-corinthians",
        chapter: 13,
        verses: &[
            "Though I speak with the tongues of men and of angels, and have not charity, I am become as sounding brass, or a tinkling cymbal.",
            "And though I have the gift of prophecy, and understand all mysteries, and all knowledge; and though I have all faith, so that I could remove mountains, and have not charity, I am nothing.",
            "And though I bestow all my goods to feed the poor, and though I give my body to be burned, and have not charity, it profiteth me nothing.",
            "Charity suffereth long, and is kind; charity envieth not; charity vaunteth not itself, is not puffed up,",
            "Doth not behave itself unseemly, seeketh not her own, is not easily provoked, thinketh no evil;",
            "Rejoiceth not in iniquity, but rejoiceth in the truth;",
            "Beareth all things, believeth all things, hopeth all things, endureth all things.",
            "Charity never faileth: but whether there be prophecies, they shall fail; whether there be tongues, they shall cease; whether there be knowledge, it shall vanish away.",
            "For we know in part, and we prophesy in part.",
            "But when that which is perfect is come, then that which is in part shall be done away.",
            "When I was a child, I spake as a child, I understood as a child, I thought as a child: but when I became a man, I put away childish things.",
            "For now we see through a glass, darkly; but then face to face: now I know in part; but then shall I know even as also I am known.",
            "And now abideth faith, hope, charity, these three; but the greatest of these is charity.",
        ],
    },
];
