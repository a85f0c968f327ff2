//! Known-answer tables for every cipher, each checked in both directions.

use transposition::cipher::{
    decrypt_columnar, decrypt_disrupted_count, decrypt_disrupted_line, decrypt_myszkowski,
    encrypt_columnar, encrypt_disrupted_count, encrypt_disrupted_line, encrypt_myszkowski,
    Elastic, Magnet, RailFence, Reverse, Route, RouteCipher, Scytale, Transposition,
};

const TEXTS: [&str; 5] = [
    "WEAREDISCOVEREDFLEEATONCE",
    "WEATTACKAT1200AM",
    "YOUCANTSEEME",
    "WELOVEPAKISTANIDESTROYINDIA",
    "JOUBLIERAIJAMAISCETETE",
];

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

fn string(symbols: Vec<char>) -> String {
    symbols.into_iter().collect()
}

fn check<C: Transposition>(cipher: &C, plaintext: &str, ciphertext: &str) {
    assert_eq!(cipher.encrypt_str(plaintext).unwrap(), ciphertext, "encrypt {}", plaintext);
    assert_eq!(cipher.decrypt_str(ciphertext).unwrap(), plaintext, "decrypt {}", ciphertext);
}

#[test]
fn columnar_known_answers() {
    let keys = ["CARGO", "ZEBRAS", "SPECIALUNITONE", "VERYBIGSECRET", "LEGRANDMANITOU"];
    let expected = [
        "EIELOWDVFTRCEECEODAEASREN",
        "T1AAAEK0TTMA2WC0",
        "NCUAETEEOYMS",
        "VSIIEIKYTDPRETLDSNAOAIWNAOE",
        "LTAETOSUCJJIREIEIMBEAA",
    ];

    for ((text, key), want) in TEXTS.iter().zip(keys).zip(expected) {
        let (text, key) = (chars(text), chars(key));
        let encrypted = encrypt_columnar(&text, &key).unwrap();
        assert_eq!(string(encrypted.clone()), want);
        assert_eq!(decrypt_columnar(&encrypted, &key).unwrap(), text);
    }
}

#[test]
fn myszkowski_known_answers() {
    let keys = ["COBRA", "GIRAFFE", "TETE", "GINGRAYOLVA", "SECRET"];
    let expected = [
        "EODAEASRENWDVFTEIELORCEEC",
        "T1C0TA20WKAEAMAT",
        "OCNSEEYUATEM",
        "ESEYWOTIIIEANKRLNDATVDAIOPS",
        "UAITOLRJACEBISEJEMTIAE",
    ];

    for ((text, key), want) in TEXTS.iter().zip(keys).zip(expected) {
        let (text, key) = (chars(text), chars(key));
        let encrypted = encrypt_myszkowski(&text, &key).unwrap();
        assert_eq!(string(encrypted.clone()), want);
        assert_eq!(decrypt_myszkowski(&encrypted, &key).unwrap(), text);
    }
}

#[test]
fn disrupted_count_known_answers() {
    let keys = ["CRYPTO", "KATANA", "TOKYO", "BAMBOO", "FOREST"];
    let disruption_keys = ["SECRET", "DISTURB", "SHRINE", "GRASS", "MOUNTAIN"];
    let expected = [
        "WCEEOERETRIVFCEODNSELEADA",
        "A1MATA0WTTAK0EC2",
        "UONEASEYECTM",
        "VIEDWOKAONLSNTIEESYIPIRAATD",
        "URAEJIJSTOEACEMBATLIIE",
    ];

    for (i, want) in expected.iter().enumerate() {
        let text = chars(TEXTS[i]);
        let key = chars(keys[i]);
        let disruption = chars(disruption_keys[i]);
        let encrypted = encrypt_disrupted_count(&text, &key, &disruption).unwrap();
        assert_eq!(&string(encrypted.clone()), want);
        assert_eq!(decrypt_disrupted_count(&encrypted, &key, &disruption).unwrap(), text);
    }
}

#[test]
fn disrupted_line_known_answers() {
    let keys = ["BIRTHDAY", "MAX", "YEP", "GHOST", "PHILIPPE"];
    let diagonal = [
        "IWSCDAOEDEEREEOFTNAVLCREE",
        "ETK10WATCAT0AMA2",
        "OCSEAMYUNTEE",
        "WEOPSDETYILVATSRIAEKAONINDI",
        "ROIAIEUMSTLEBCEJAJATIE",
    ];
    let filled = [
        "IWSCDAOEDEEREEOFTNAVLCREE",
        "EKT10WATT20CAAMA",
        "OCSMTAEYUNEE",
        "WEOPSIADLVATEREKASOIINTYNDI",
        "ROIAIEUMSTLEBCEJAJATIE",
    ];

    for i in 0..keys.len() {
        let text = chars(TEXTS[i]);
        let key = chars(keys[i]);
        for (fill, want) in [(false, diagonal[i]), (true, filled[i])] {
            let encrypted = encrypt_disrupted_line(&text, &key, fill).unwrap();
            assert_eq!(string(encrypted.clone()), want, "key {} fill {}", keys[i], fill);
            assert_eq!(decrypt_disrupted_line(&encrypted, &key, fill).unwrap(), text);
        }
    }
}

const WIDTHS: [usize; 5] = [6, 7, 3, 9, 1];

#[test]
fn spiral_known_answers() {
    let expected: [[&str; 8]; 5] = [
        [
            "WEAREDEECEERISCOVLNOTAEDF", "WIREECEEDERAESEATONLVOCDF",
            "DERAEWIREECEEVOCSEATONLFD", "DEECEERIWEAREVLNOTAESCOFD",
            "ECEEDERAEWIREATONLVOCSEDF", "EERIWEAREDEECAESCOVLNOTDF",
            "EERIWEAREDEECNOTAESCOVLFD", "CEEDERAEWIREENLVOCSEATOFD",
        ],
        [
            "WEATTAC0MAKAT120", "WKAM0CATTAEAT120", "CATTAEWKAM0021TA", "C0MAKWEATTA021TA",
            "AM0CATTAEWKAT120", "AKWEATTAC0MAT120", "MAKWEATTAC0021TA", "0CATTAEWKAM021TA",
        ],
        [
            "YOUNEEMETCAS", "YCTEMEENUOAS", "UOYCTEMEENAS", "UNEEMETCYOAS",
            "EMEENUOYCTSA", "ETCYOUNEEMSA", "EMETCYOUNESA", "EENUOYCTEMSA",
        ],
        [
            "WELOVEPAKSAIDNIYORTISTANIDE", "WITROYINDIASKAPEVOLESTANIDE",
            "KAPEVOLEWITROYINDIASEDINATS", "KSAIDNIYORTIWELOVEPAEDINATS",
            "TROYINDIASKAPEVOLEWISTANIDE", "TIWELOVEPAKSAIDNIYORSTANIDE",
            "AIDNIYORTIWELOVEPAKSEDINATS", "ASKAPEVOLEWITROYINDIEDINATS",
        ],
        [
            "JOUBLIERAIJAMAISCETETE", "JOUBLIERAIJAMAISCETETE",
            "JOUBLIERAIJAMAISCETETE", "JOUBLIERAIJAMAISCETETE",
            "ETETECSIAMAJIAREILBUOJ", "ETETECSIAMAJIAREILBUOJ",
            "ETETECSIAMAJIAREILBUOJ", "ETETECSIAMAJIAREILBUOJ",
        ],
    ];

    for (i, row) in expected.iter().enumerate() {
        for (route, want) in Route::ALL.into_iter().zip(row) {
            check(&RouteCipher::spiral(WIDTHS[i], route), TEXTS[i], want);
        }
    }
}

#[test]
fn serpent_known_answers() {
    let expected: [[&str; 8]; 5] = [
        [
            "WEAREDEVOCSIREDFLECNOTAEE", "WIREEAESEACDTOFOREVLNCEED",
            "DERAEWISCOVEELFDEREATONCE", "DEECNLVEROFOTDCAESEAEERIW",
            "ECNOTAEREDFLEEVOCSIWEARED", "EERIWESEATDCAROFONLVEDEEC",
            "EEATONCELFDERISCOVEDERAEW", "CEEDEVLNOFORACDTAESEWIREE",
        ],
        [
            "WEATTAC0021TAKAM", "WKAMAEAT1TT20AC0", "CATTAEWKAT1200MA", "C00AT21TATMAEWKA",
            "AM0021TAKWEATTAC", "AKWEAMTAT12TA00C", "MAKAT1200CATTAEW", "0CA02TT1TAEAMAKW",
        ],
        [
            "YOUNACTSEEME", "YCTEMSAOUNEE", "UOYCANESTEME", "UNEEMSAOYCTE",
            "EMEESTCANUOY", "ETCYOASMEENU", "EMETSENACYOU", "EENUOASMETCY",
        ],
        [
            "WELOVEPAKSEDINATSITROYINDIA", "WITRSELTOYAOVNINIEPDDIEAKSA",
            "KAPEVOLEWISTANIDESAIDNIYORT", "KSAIEAPDDNIEVNIYAOLTORSEWIT",
            "TROYINDIASEDINATSIWELOVEPAK", "TIWESROTLOAYINVEINDDPAEIASK",
            "AIDNIYORTISTANIDESKAPEVOLEW", "ASKAEIDDPEININVOAYOTLESRTIW",
        ],
        [
            "JOUBLIERAIJAMAISCETETE", "JOUBLIERAIJAMAISCETETE",
            "JOUBLIERAIJAMAISCETETE", "JOUBLIERAIJAMAISCETETE",
            "ETETECSIAMAJIAREILBUOJ", "ETETECSIAMAJIAREILBUOJ",
            "ETETECSIAMAJIAREILBUOJ", "ETETECSIAMAJIAREILBUOJ",
        ],
    ];

    for (i, row) in expected.iter().enumerate() {
        for (route, want) in Route::ALL.into_iter().zip(row) {
            check(&RouteCipher::serpent(WIDTHS[i], route), TEXTS[i], want);
        }
    }
}

#[test]
fn rail_fence_known_answers() {
    let lines = [5, 7, 3, 9, 1];
    let expected = [
        "WCLEESOFECAIVDENRDEEAOERT",
        "W0E20A1ATTMTAAKC",
        "YAEOCNSEEUTM",
        "WEEDSLITONRVAOETYPSIAAINIKD",
        "JOUBLIERAIJAMAISCETETE",
    ];
    for i in 0..TEXTS.len() {
        check(&RailFence { lines: lines[i] }, TEXTS[i], expected[i]);
    }
}

#[test]
fn scytale_known_answers() {
    let lines = [6, 2, 1, 11, 5];
    let expected = [
        "WIREEESEAACDTROFOEVLNDEEC",
        "WATCA10AETAKT20M",
        "YOUCANTSEEME",
        "WTIEANLNDOIIVDAEEPSATKRIOSY",
        "JIJSTOEACEURMEBAATLIIE",
    ];
    for i in 0..TEXTS.len() {
        check(&Scytale { lines: lines[i] }, TEXTS[i], expected[i]);
    }
}

#[test]
fn unkeyed_known_answers() {
    let reversed = [
        "ECNOTAEELFDEREVOCSIDERAEW",
        "MA0021TAKCATTAEW",
        "EMEESTNACUOY",
        "AIDNIYORTSEDINATSIKAPEVOLEW",
        "ETETECSIAMAJIAREILBUOJ",
    ];
    let magnet = [
        "WEECANROETDAIESECLOFVDEER",
        "WMEAA0T0T2A1CTKA",
        "YEOMUECEASNT",
        "WAEILDONVIEYPOARKTISSETDAIN",
        "JEOTUEBTLEICESRIAAIMJA",
    ];
    let elastic = [
        "REEVDOFCLSEIEDAETROANECWE",
        "KACTA1T2T0A0EAWM",
        "NTASCEUEOMYE",
        "NAITDSEISKTARPOEYVIONLDEIWA",
        "JAIMAARIESICLEBTUEOTJE",
    ];
    for i in 0..TEXTS.len() {
        check(&Reverse, TEXTS[i], reversed[i]);
        check(&Magnet, TEXTS[i], magnet[i]);
        check(&Elastic, TEXTS[i], elastic[i]);
    }
}
