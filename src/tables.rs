pub const STORY_PUNCTUATION: [char; 2] = ['!', '?'];

pub const VERB_NOUNISH_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ship", "hood", "ism", "ist", "age", "ence", "ance",
];
pub const ADJECTIVE_SUFFIXES: &[&str] = &["ful", "less", "ous", "ish"];
pub const VIVID_ADJECTIVE_SUFFIXES: &[&str] = &["y", "ish", "ous", "ful", "less"];
pub const OBJECT_ABSTRACT_SUFFIXES: &[&str] = &[
    "tion", "sion", "ness", "ity", "ship", "hood", "ism", "ence", "ance",
];
pub const OBJECT_VERBISH_SUFFIXES: &[&str] = &["ate", "ize", "ise"];
pub const OBJECT_ADJECTIVISH_SUFFIXES: &[&str] =
    &["ous", "ive", "ful", "less", "ish", "able", "ible"];

pub const STOP_WORDS: &str = concat!(
    "a an and another as at be been being but by each few for from if in into is it its ",
    "itself many me mine most much my myself no not of off on onto or our ours ourselves ",
    "same she he him his her hers their theirs them themselves then they this those to ",
    "too up very we what when where who why will with without you your yours yourself ",
    "yourselves",
);

/// Dropped from the corpus before any classification.
pub const SFW_EXCLUDED: &str = concat!(
    "badass asshole asshat bastard bitch bitchy bullshit cock cocksucker cunt damn douche ",
    "douchebag fuck fucker fucking horny motherfucker prick pussy shit shitty slut thong ",
    "whore panty gonad rectal racist racism islam islamic prozac walmart google yahoo ",
    "xbox myspace ipad ipod",
);

/// Verb roots accepted without corpus evidence.
pub const VERB_SEEDS: &str = concat!(
    "juggle yodel launch paint tickle hug whistle zigzag moonwalk wobble balance spin ",
    "twirl flip hop dash sneak race zoom glide drift bounce nudge poke tap knead fold ",
    "stack mix stir grill toast fry brew sip munch chase bump boop zap weld patch tune ",
    "polish spray knit crochet sketch doodle hum sing chant clap snap dribble paddle surf ",
    "skate cart pack ship mail sort scan count measure map trace carve sculpt mold forge ",
    "stitch iron vacuum sweep dust water plant trim harvest chop peel squeeze crack smash ",
    "build code debug deploy refactor mock test merge rebase ping ponder mutter laugh ",
    "grin smirk gawk blink daydream plot invent guess decide announce confess approve ",
    "reject roast curse swear cuss bicker argue negotiate bargain trade borrow return ",
    "hide reveal uncork uncap unwrap jam collect connect adapt adjust avoid await begin ",
    "bring call carry catch change check climb close compare cook crawl create cross ",
    "dance deliver design destroy divide draw drink drive drop edit enjoy enter escape ",
    "evolve expand explain explore fade fail fetch fight fill find finish fix float ",
    "follow force forget gather give glance grab grow guide handle help hike hold hover ",
    "hunt imagine improve include inform invite join joke jump keep kick knock know leave ",
    "lift like listen live lock look make march move need open order pass pause pick ",
    "place plan play point pop pour prefer prepare press protect push reach read record ",
    "relax remove repair replace reply report rescue rest ride ring roll rub run save ",
    "score search seem send settle shape share shift shout show shut sit skip sleep slide ",
    "smile sniff solve sound speak split sprint stand start stay step stop stretch strike ",
    "study swap swing switch taste teach tell think throw train travel treat trust turn ",
    "twist type unlock update use visit wait walk watch wear whisper win wish work write ",
    "depend survive vanish remain exist continue appear happen allow accept achieve add ",
    "admit adopt advise agree ask assume belong break buy cover cut describe disappear ",
    "discover eat expect face fall feel get have hear hit learn let lose love mean meet ",
    "own pay prove put say see set spend suggest take talk touch understand want",
);

/// Words that look inflected in the corpus but are not verbs.
pub const VERB_BLOCKLIST: &str = concat!(
    "acid actor actress agency album alcohol angel annual answer anyone avenue author ",
    "award beauty because before beyond biology brother business camera capital century ",
    "chapter charity cheese chicken citizen coffee college color company country custom ",
    "culture damage decade degree demand dental doctor dollar double drawing driving ",
    "during email energy engine entire episode ethics family federal female finance ",
    "fitness forever freedom friend future gender general grocery guitar habit handle ",
    "history holiday hundred impact income indeed injury inside island itself junior ",
    "kidney kitchen language launch league legacy lesson letter little living manual ",
    "member memory method middle minute modern module monday month mostly mother nature ",
    "nearly nearby neither network notice number object office option origin parent ",
    "people person phone photo piece planet policy popular portion power prayer premium ",
    "present private problem process product project promise proper public purpose ",
    "quarter random rather rating reason recent record region regular remain remote ",
    "remove report result review reward rhythm school science season section senior ",
    "service setting should signal simple sister social source speech square status ",
    "steady street stress strong studio submit subject success summer sunday supply ",
    "system target teacher thanks theory thirty though thought thread ticket title today ",
    "toilet toward travel treaty truly tuesday tuition unique unlock update upload ",
    "utility valley variety versus victim video village visual volume wallet wanted ",
    "warning wealth wedding weekend window winner winter within without wonder worker ",
    "world writing",
);

pub const ADJECTIVE_SEEDS: &str = concat!(
    "fuzzy neon tiny sleepy crispy golden rubber cosmic wobbly spicy frosty silky mellow ",
    "zesty dusty glossy noisy sneaky quirky nimble brisk calm brave goofy jazzy gritty ",
    "shiny stormy sunny misty smoky fluffy prickly chunky bouncy wiry rusty icy peppery ",
    "sugary salty minty sour bitter soft loud quiet rapid gentle odd fancy dapper clever ",
    "cheeky scrappy tidy messy classy clumsy snappy glitchy pixel windy lunar solar ",
    "velvet woolly speedy sturdy thirsty hungry cranky happy moody smug feral noble regal ",
    "groovy funky silly absurd awkward vivid bright dim muted bold timid narrow broad ",
    "mighty wee giant mini turbo stealthy sparkly fizzy gummy gooey loopy zippy punchy ",
    "crunchy spooky kooky snazzy peppy perky rowdy nerdy dorky wonky feisty nifty breezy ",
    "squishy jolly merry zany wacky sassy saucy tangy jammy toasty nutty citrusy creamy ",
    "buttery herby glittery candy plush poppy radiant dreamy lanky boozy",
);

pub const ADJECTIVE_BORING: &str = concat!(
    "able basic certain common current direct exact final formal general global legal ",
    "local major minor modern normal official proper public real regular related simple ",
    "single standard typical usual valid various whole entire former latter neutral ",
    "random ready recent serious stable superior inferior primary secondary corporate ",
    "fiscal annual monthly weekly daily hourly digital analog numeric logical physical ",
    "virtual modular popular private easy calm gentle curious high low payable liable",
);

pub const TWIST_SEEDS: &str = concat!(
    "proudly cheerfully boldly gently brightly suddenly quietly loudly awkwardly wildly ",
    "gladly neatly warmly softly swiftly slowly shamelessly weirdly playfully bravely ",
    "eagerly lazily nervously calmly smugly politely gleefully oddly smoothly instantly ",
    "carefully clumsily happily sadly grumpily sassily frankly plainly totally mostly ",
    "lightly barely nearly hugely deeply sharply wisely merrily promptly honestly ",
    "blatantly",
);

pub const TWIST_BLOCKLIST: &str = "family italy july rally fully reply supply only ugly";

pub const OBJECT_SEEDS: &str = concat!(
    "toaster teapot burrito cactus rocket helmet guitar pickle donut muffin lantern ",
    "scooter lamppost pancake waffle cookie kettle bucket hammer wrench zipper button ",
    "pillow blanket slipper sandal backpack notebook stapler marker crayon whistle ",
    "trumpet banjo ukulele tambourine boombox camera tripod compass magnet battery socket ",
    "cable router modem keyboard mouse joystick gamepad puzzle marble domino kite frisbee ",
    "skateboard surfboard kayak canoe umbrella raincoat mug goblet spoon fork spatula ",
    "ladle colander saucepan skillet cupcake pretzel popcorn taco nacho dumpling ravioli ",
    "baguette croissant bagel pineapple coconut avocado turnip carrot radish pumpkin ",
    "melon grape cherry peach lemon lime onion garlic celery broccoli spinach tofu ramen ",
    "sushi bento thermos flask bottle jar vase mirror candle towel soap sponge mop broom ",
    "vacuum ladder shovel visor scarf mittens jacket poncho pinata confetti kazoo maracas ",
    "bongos keytar clarinet marimba megaphone monocle beret tiara kimono sombrero jetpack ",
    "hoverboard boomerang slingshot yoyo lollipop jellybean gumball snowglobe firework ",
    "sparkler discoball pogo keychain sticker comic postcard teacup mooncake bathbomb ",
    "goggles rubberduck mochi kimchi",
);

pub const OBJECT_EXCLUDED: &str = concat!(
    "about above across after again against almost along also among around because before ",
    "behind below beside between beyond during either enough every maybe might never ",
    "often other since some someone something their there these thing think those toward ",
    "under until where while which whose without within unknown known likely likelyly ",
    "perhaps always usually mostly online offline upward downward inside outside",
);

/// Nouns too generic to make a memorable object.
pub const OBJECT_BLAND: &str = concat!(
    "account address agency amount answer area aspect attempt author average benefit ",
    "capital category century chapter choice citizen client college comment company ",
    "concept consent context control country county culture data decade degree demand ",
    "detail device effect effort energy entity entry error example factor feature finance ",
    "function future goal group history impact income index industry info insight issue ",
    "item language level limit logic method minute model module moment month number ",
    "office option output parent people person phase policy problem process product ",
    "profile project purpose quality quantity quarter reason record region report request ",
    "result review role section sector service setting signal source standard status ",
    "subject success support survey system target theory title topic value version volume ",
    "world another upper lower former latter manager proton ascent filth gory wince ",
    "glance",
);

/// Short given names (five letters or fewer for most), ASCII transliterated.
pub const NAME_ACTORS: &str = concat!(
    // Spanish / Portuguese
    "ana luis jose juan maria mario diego lucia sofia carla pablo rita ines raul pedro bruno ",
    // Indian (multiple language groups)
    "aarav arjun neha priya riya diya isha kabir anaya meera rohan rahul tara anil ",
    // Italian
    "luca marco paolo enzo dario elia sara anna gino nina carlo ",
    // Arabic
    "omar ali sami ziad noor lina yara rami salma amir faris nada ",
    // Greek
    "niko yanni eleni irene dora petra alex yiota aris teo ",
    // German
    "hans klaus petra heidi lars greta nina lena tobi erik ",
    // Russian
    "ivan olga dima masha irina pavel yulia nika oleg lena ",
    // Ukrainian
    "oleg ivan liza yura ira roman inna olena tara yana ",
    // Hungarian
    "bela zoli anna reka lili adam tamas eszti vera dora ",
    // French
    "lucie marie paul remi chloe clara hugo leo noel elise ",
    // Turkish
    "emir elif deniz ece cenk berk selin kerem naz asli ",
    // Persian
    "arya omid leila darya parsa shadi roza sina mina nilo ",
    // Polish
    "ania ola marta piotr pawel marek lena kuba iga tomek ",
    // Czech / Slovak
    "jana vera pavel klara roman david tomas lucie adela iveta ",
    // Romanian
    "ion ioan ana mara vlad dora ilie radu oana sora ",
    // Hebrew
    "noam yael lior idan itai aviv tal adi ori yona ",
    // Japanese (romanized)
    "yuki riku ren mei aoi hina sota haru akira nao ",
    // Korean (romanized)
    "min joon jiho yuna suji bora hana seon jiye taey ",
    // Chinese (pinyin)
    "li wei hao ming yu chen yan lin mei tao ",
    // Vietnamese
    "linh minh trang hanh an bao dung ngoc quynh phuc ",
    // Indonesian / Malay
    "putri dewi adi putra agus sari reza bima rani eka ",
    // Filipino
    "liza nico joel paolo mila ina rina carlo gina noel ",
    // East African / Swahili usage
    "amani zuri juma neema imani alia zain omari ayan hali",
);

pub const CREATURE_ACTORS: &str = concat!(
    "otter badger panda llama tiger eagle koala moose goose raven robin gecko puppy ",
    "kitten falcon shark whale penguin beaver hamster weasel yak zebra parrot monkey ",
    "dragon ninja pirate pilot ranger drummer baker barber coder doctor poet skater ",
    "surfer captain scout monk robot droid farmer courier boxer sailor diver miner artist ",
    "waiter singer dancer driver",
);

pub const EXTRA_ACTORS: &str = concat!(
    "actor actress acrobat agent artist athlete baker barber boxer captain chef clerk ",
    "coach courier dancer diver doctor driver farmer fighter friend guide hacker hero ",
    "hunter judge knight leader mentor ninja nurse painter pilot pirate poet ranger ",
    "reader rider runner sailor scout singer skater speaker surfer teacher traveler ",
    "waiter warrior writer yak zebra rabbit dolphin turtle horse pony donkey wolf bear ",
    "lion goat sheep owl hawk crow fox swan beagle collie spaniel poodle jaguar leopard ",
    "panther",
);

pub const RELATIONS: &str = concat!(
    "under over near beside around behind before after during while inside outside across ",
    "between beyond beneath within toward against atop below along amid among past ",
    "through",
);

pub const PROFANE_ADJECTIVES: &str = "shitty damn fucking filthy crappy bitchy horny raunchy nasty";

pub const PROFANE_OBJECTS: &str = "bullshit shitshow asshole dumbass asshat bastard douchebag fuckery";

pub const PROFANE_VERBS: &str = "swears curses cusses fucks bitches";

pub const PROFANE_TWISTS: &str = "damnably shittily fuckingly foully bitchily";
