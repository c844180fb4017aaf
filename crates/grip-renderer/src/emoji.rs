//! Emoji shortcode table and substitution.
//!
//! Shortcodes are written `:name:`. Most map to a Unicode glyph; GitHub's
//! custom emoji have no glyph and map to an image path instead.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt::Write;
use std::sync::LazyLock;

use crate::html::escape_html;

/// Base path for custom emoji images.
pub const EMOJI_IMAGE_BASE: &str = "/static/emojis";

/// Resolved value of a shortcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emoji {
    /// Literal glyph.
    Glyph(&'static str),
    /// Absolute image path.
    Image(&'static str),
}

impl Emoji {
    fn from_value(value: &'static str) -> Self {
        if value.starts_with('/') {
            Self::Image(value)
        } else {
            Self::Glyph(value)
        }
    }

    /// Write the HTML for this emoji, using `code` as title and alt text.
    fn write_html(self, code: &str, out: &mut String) {
        match self {
            Self::Glyph(glyph) => out.push_str(glyph),
            Self::Image(src) => {
                let code = escape_html(code);
                let _ = write!(
                    out,
                    r#"<img class="emoji" title="{code}" alt="{code}" src="{src}" height="20" width="20" align="absmiddle">"#
                );
            }
        }
    }
}

static EMOJI_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| EMOJI_TABLE.iter().copied().collect());

/// Look up a shortcode including its surrounding colons.
///
/// ```
/// use grip_renderer::emoji::{self, Emoji};
///
/// assert_eq!(emoji::lookup(":rocket:"), Some(Emoji::Glyph("🚀")));
/// assert_eq!(emoji::lookup(":no_such_emoji:"), None);
/// ```
#[must_use]
pub fn lookup(code: &str) -> Option<Emoji> {
    EMOJI_MAP.get(code).copied().map(Emoji::from_value)
}

/// Replace every known `:shortcode:` in `text`.
///
/// Unknown shortcodes are left verbatim. Borrows the input when nothing
/// was replaced.
#[must_use]
pub fn substitute(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(':') else {
        return Cow::Borrowed(text);
    };

    let mut out: Option<String> = None;
    let mut copied = 0;
    let mut pos = first;

    while pos < text.len() {
        let Some(offset) = text[pos..].find(':') else {
            break;
        };
        let start = pos + offset;
        let token_len = text[start + 1..]
            .bytes()
            .take_while(|&b| is_token_byte(b))
            .count();
        let end = start + 1 + token_len;

        if token_len > 0 && text.as_bytes().get(end) == Some(&b':') {
            let code = &text[start..=end];
            if let Some(emoji) = lookup(code) {
                let buf = out.get_or_insert_with(|| String::with_capacity(text.len() + 16));
                buf.push_str(&text[copied..start]);
                emoji.write_html(code, buf);
                copied = end + 1;
                pos = end + 1;
                continue;
            }
        }

        // The closing colon of a miss may open the next shortcode
        pos = start + 1;
    }

    match out {
        Some(mut buf) => {
            buf.push_str(&text[copied..]);
            Cow::Owned(buf)
        }
        None => Cow::Borrowed(text),
    }
}

fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'+' | b'-')
}

/// Shortcode to glyph or image path.
static EMOJI_TABLE: &[(&str, &str)] = &[
    // Smileys
    (":smile:", "😄"),
    (":smiley:", "😃"),
    (":grinning:", "😀"),
    (":blush:", "😊"),
    (":relaxed:", "☺️"),
    (":wink:", "😉"),
    (":heart_eyes:", "😍"),
    (":kissing_heart:", "😘"),
    (":stuck_out_tongue:", "😛"),
    (":stuck_out_tongue_winking_eye:", "😜"),
    (":grin:", "😁"),
    (":laughing:", "😆"),
    (":satisfied:", "😆"),
    (":joy:", "😂"),
    (":rofl:", "🤣"),
    (":sweat_smile:", "😅"),
    (":innocent:", "😇"),
    (":slightly_smiling_face:", "🙂"),
    (":upside_down_face:", "🙃"),
    (":relieved:", "😌"),
    (":sunglasses:", "😎"),
    (":smirk:", "😏"),
    (":neutral_face:", "😐"),
    (":expressionless:", "😑"),
    (":unamused:", "😒"),
    (":sweat:", "😓"),
    (":pensive:", "😔"),
    (":confused:", "😕"),
    (":thinking:", "🤔"),
    (":hugs:", "🤗"),
    (":nerd_face:", "🤓"),
    (":disappointed:", "😞"),
    (":worried:", "😟"),
    (":angry:", "😠"),
    (":rage:", "😡"),
    (":cry:", "😢"),
    (":sob:", "😭"),
    (":fearful:", "😨"),
    (":scream:", "😱"),
    (":flushed:", "😳"),
    (":sleeping:", "😴"),
    (":dizzy_face:", "😵"),
    (":mask:", "😷"),
    (":exploding_head:", "🤯"),
    (":partying_face:", "🥳"),
    (":zipper_mouth_face:", "🤐"),
    (":roll_eyes:", "🙄"),
    (":yum:", "😋"),
    (":skull:", "💀"),
    (":ghost:", "👻"),
    (":alien:", "👽"),
    (":robot:", "🤖"),
    (":poop:", "💩"),
    (":hankey:", "💩"),
    (":see_no_evil:", "🙈"),
    (":hear_no_evil:", "🙉"),
    (":speak_no_evil:", "🙊"),
    // People and gestures
    (":+1:", "👍"),
    (":thumbsup:", "👍"),
    (":-1:", "👎"),
    (":thumbsdown:", "👎"),
    (":ok_hand:", "👌"),
    (":punch:", "👊"),
    (":facepunch:", "👊"),
    (":fist:", "✊"),
    (":v:", "✌️"),
    (":wave:", "👋"),
    (":raised_hand:", "✋"),
    (":hand:", "✋"),
    (":clap:", "👏"),
    (":raised_hands:", "🙌"),
    (":pray:", "🙏"),
    (":muscle:", "💪"),
    (":point_up:", "☝️"),
    (":point_down:", "👇"),
    (":point_left:", "👈"),
    (":point_right:", "👉"),
    (":writing_hand:", "✍️"),
    (":eyes:", "👀"),
    (":brain:", "🧠"),
    (":man_shrugging:", "🤷‍♂️"),
    (":woman_shrugging:", "🤷‍♀️"),
    (":shrug:", "🤷"),
    (":facepalm:", "🤦"),
    (":technologist:", "🧑‍💻"),
    // Hearts and symbols
    (":heart:", "❤️"),
    (":orange_heart:", "🧡"),
    (":yellow_heart:", "💛"),
    (":green_heart:", "💚"),
    (":blue_heart:", "💙"),
    (":purple_heart:", "💜"),
    (":black_heart:", "🖤"),
    (":broken_heart:", "💔"),
    (":sparkling_heart:", "💖"),
    (":100:", "💯"),
    (":boom:", "💥"),
    (":collision:", "💥"),
    (":sparkles:", "✨"),
    (":star:", "⭐"),
    (":star2:", "🌟"),
    (":dizzy:", "💫"),
    (":zap:", "⚡"),
    (":fire:", "🔥"),
    (":tada:", "🎉"),
    (":confetti_ball:", "🎊"),
    (":balloon:", "🎈"),
    (":gift:", "🎁"),
    (":trophy:", "🏆"),
    (":medal_sports:", "🏅"),
    (":1st_place_medal:", "🥇"),
    (":warning:", "⚠️"),
    (":no_entry:", "⛔"),
    (":no_entry_sign:", "🚫"),
    (":x:", "❌"),
    (":heavy_check_mark:", "✔️"),
    (":white_check_mark:", "✅"),
    (":ballot_box_with_check:", "☑️"),
    (":heavy_plus_sign:", "➕"),
    (":heavy_minus_sign:", "➖"),
    (":question:", "❓"),
    (":grey_question:", "❔"),
    (":exclamation:", "❗"),
    (":heavy_exclamation_mark:", "❗"),
    (":bangbang:", "‼️"),
    (":information_source:", "ℹ️"),
    (":recycle:", "♻️"),
    (":copyright:", "©️"),
    (":registered:", "®️"),
    (":tm:", "™️"),
    (":arrow_up:", "⬆️"),
    (":arrow_down:", "⬇️"),
    (":arrow_left:", "⬅️"),
    (":arrow_right:", "➡️"),
    (":arrows_counterclockwise:", "🔄"),
    (":red_circle:", "🔴"),
    (":orange_circle:", "🟠"),
    (":yellow_circle:", "🟡"),
    (":green_circle:", "🟢"),
    (":large_blue_circle:", "🔵"),
    (":white_circle:", "⚪"),
    (":black_circle:", "⚫"),
    (":new:", "🆕"),
    (":free:", "🆓"),
    (":up:", "🆙"),
    (":cool:", "🆒"),
    (":ok:", "🆗"),
    (":sos:", "🆘"),
    // Nature
    (":sunny:", "☀️"),
    (":cloud:", "☁️"),
    (":umbrella:", "☔"),
    (":snowflake:", "❄️"),
    (":rainbow:", "🌈"),
    (":ocean:", "🌊"),
    (":earth_africa:", "🌍"),
    (":earth_americas:", "🌎"),
    (":earth_asia:", "🌏"),
    (":globe_with_meridians:", "🌐"),
    (":crescent_moon:", "🌙"),
    (":seedling:", "🌱"),
    (":evergreen_tree:", "🌲"),
    (":deciduous_tree:", "🌳"),
    (":cactus:", "🌵"),
    (":herb:", "🌿"),
    (":four_leaf_clover:", "🍀"),
    (":maple_leaf:", "🍁"),
    (":fallen_leaf:", "🍂"),
    (":sunflower:", "🌻"),
    (":rose:", "🌹"),
    (":tulip:", "🌷"),
    (":cherry_blossom:", "🌸"),
    (":mushroom:", "🍄"),
    (":dog:", "🐶"),
    (":cat:", "🐱"),
    (":mouse:", "🐭"),
    (":rabbit:", "🐰"),
    (":fox_face:", "🦊"),
    (":bear:", "🐻"),
    (":panda_face:", "🐼"),
    (":koala:", "🐨"),
    (":tiger:", "🐯"),
    (":lion:", "🦁"),
    (":cow:", "🐮"),
    (":pig:", "🐷"),
    (":frog:", "🐸"),
    (":monkey_face:", "🐵"),
    (":chicken:", "🐔"),
    (":penguin:", "🐧"),
    (":bird:", "🐦"),
    (":owl:", "🦉"),
    (":eagle:", "🦅"),
    (":duck:", "🦆"),
    (":bee:", "🐝"),
    (":honeybee:", "🐝"),
    (":bug:", "🐛"),
    (":butterfly:", "🦋"),
    (":snail:", "🐌"),
    (":turtle:", "🐢"),
    (":snake:", "🐍"),
    (":crab:", "🦀"),
    (":octopus:", "🐙"),
    (":fish:", "🐟"),
    (":whale:", "🐳"),
    (":dolphin:", "🐬"),
    (":shark:", "🦈"),
    (":unicorn:", "🦄"),
    (":dragon:", "🐉"),
    (":sauropod:", "🦕"),
    (":t-rex:", "🦖"),
    // Food
    (":apple:", "🍎"),
    (":green_apple:", "🍏"),
    (":banana:", "🍌"),
    (":cherries:", "🍒"),
    (":strawberry:", "🍓"),
    (":grapes:", "🍇"),
    (":watermelon:", "🍉"),
    (":lemon:", "🍋"),
    (":peach:", "🍑"),
    (":avocado:", "🥑"),
    (":hot_pepper:", "🌶️"),
    (":corn:", "🌽"),
    (":bread:", "🍞"),
    (":cheese:", "🧀"),
    (":egg:", "🥚"),
    (":hamburger:", "🍔"),
    (":fries:", "🍟"),
    (":pizza:", "🍕"),
    (":taco:", "🌮"),
    (":burrito:", "🌯"),
    (":sushi:", "🍣"),
    (":ramen:", "🍜"),
    (":spaghetti:", "🍝"),
    (":popcorn:", "🍿"),
    (":doughnut:", "🍩"),
    (":cookie:", "🍪"),
    (":cake:", "🍰"),
    (":birthday:", "🎂"),
    (":chocolate_bar:", "🍫"),
    (":candy:", "🍬"),
    (":icecream:", "🍦"),
    (":coffee:", "☕"),
    (":tea:", "🍵"),
    (":beer:", "🍺"),
    (":beers:", "🍻"),
    (":wine_glass:", "🍷"),
    (":cocktail:", "🍸"),
    (":champagne:", "🍾"),
    // Activities and travel
    (":soccer:", "⚽"),
    (":basketball:", "🏀"),
    (":football:", "🏈"),
    (":tennis:", "🎾"),
    (":video_game:", "🎮"),
    (":game_die:", "🎲"),
    (":dart:", "🎯"),
    (":art:", "🎨"),
    (":musical_note:", "🎵"),
    (":notes:", "🎶"),
    (":guitar:", "🎸"),
    (":microphone:", "🎤"),
    (":headphones:", "🎧"),
    (":movie_camera:", "🎥"),
    (":clapper:", "🎬"),
    (":rocket:", "🚀"),
    (":airplane:", "✈️"),
    (":car:", "🚗"),
    (":red_car:", "🚗"),
    (":bike:", "🚲"),
    (":ship:", "🚢"),
    (":train:", "🚋"),
    (":bus:", "🚌"),
    (":construction:", "🚧"),
    (":rotating_light:", "🚨"),
    (":checkered_flag:", "🏁"),
    (":triangular_flag_on_post:", "🚩"),
    (":house:", "🏠"),
    (":office:", "🏢"),
    (":hospital:", "🏥"),
    (":mountain:", "⛰️"),
    (":beach_umbrella:", "🏖️"),
    (":world_map:", "🗺️"),
    // Objects
    (":watch:", "⌚"),
    (":iphone:", "📱"),
    (":computer:", "💻"),
    (":keyboard:", "⌨️"),
    (":desktop_computer:", "🖥️"),
    (":printer:", "🖨️"),
    (":floppy_disk:", "💾"),
    (":cd:", "💿"),
    (":camera:", "📷"),
    (":tv:", "📺"),
    (":radio:", "📻"),
    (":hourglass:", "⌛"),
    (":alarm_clock:", "⏰"),
    (":stopwatch:", "⏱️"),
    (":battery:", "🔋"),
    (":electric_plug:", "🔌"),
    (":bulb:", "💡"),
    (":flashlight:", "🔦"),
    (":candle:", "🕯️"),
    (":moneybag:", "💰"),
    (":dollar:", "💵"),
    (":credit_card:", "💳"),
    (":gem:", "💎"),
    (":wrench:", "🔧"),
    (":hammer:", "🔨"),
    (":hammer_and_wrench:", "🛠️"),
    (":nut_and_bolt:", "🔩"),
    (":gear:", "⚙️"),
    (":link:", "🔗"),
    (":paperclip:", "📎"),
    (":scissors:", "✂️"),
    (":lock:", "🔒"),
    (":unlock:", "🔓"),
    (":key:", "🔑"),
    (":shield:", "🛡️"),
    (":bell:", "🔔"),
    (":no_bell:", "🔕"),
    (":loudspeaker:", "📢"),
    (":mega:", "📣"),
    (":mag:", "🔍"),
    (":mag_right:", "🔎"),
    (":microscope:", "🔬"),
    (":telescope:", "🔭"),
    (":test_tube:", "🧪"),
    (":dna:", "🧬"),
    (":pill:", "💊"),
    (":syringe:", "💉"),
    (":package:", "📦"),
    (":mailbox:", "📫"),
    (":email:", "📧"),
    (":envelope:", "✉️"),
    (":inbox_tray:", "📥"),
    (":outbox_tray:", "📤"),
    (":memo:", "📝"),
    (":pencil:", "📝"),
    (":pencil2:", "✏️"),
    (":black_nib:", "✒️"),
    (":book:", "📖"),
    (":books:", "📚"),
    (":notebook:", "📓"),
    (":ledger:", "📒"),
    (":page_facing_up:", "📄"),
    (":scroll:", "📜"),
    (":bookmark:", "🔖"),
    (":label:", "🏷️"),
    (":calendar:", "📆"),
    (":date:", "📅"),
    (":clipboard:", "📋"),
    (":pushpin:", "📌"),
    (":round_pushpin:", "📍"),
    (":chart_with_upwards_trend:", "📈"),
    (":chart_with_downwards_trend:", "📉"),
    (":bar_chart:", "📊"),
    (":file_folder:", "📁"),
    (":open_file_folder:", "📂"),
    (":card_index_dividers:", "🗂️"),
    (":wastebasket:", "🗑️"),
    (":triangular_ruler:", "📐"),
    (":straight_ruler:", "📏"),
    (":lipstick:", "💄"),
    (":crown:", "👑"),
    (":tophat:", "🎩"),
    (":mortar_board:", "🎓"),
    (":eyeglasses:", "👓"),
    (":necktie:", "👔"),
    (":shirt:", "👕"),
    (":jeans:", "👖"),
    (":running_shirt_with_sash:", "🎽"),
    (":speech_balloon:", "💬"),
    (":thought_balloon:", "💭"),
    (":zzz:", "💤"),
    (":hourglass_flowing_sand:", "⏳"),
    (":white_flag:", "🏳️"),
    (":black_flag:", "🏴"),
    (":rainbow_flag:", "🏳️‍🌈"),
    (":triangular_flag:", "🚩"),
    (":heavy_dollar_sign:", "💲"),
    (":lock_with_ink_pen:", "🔏"),
    (":closed_lock_with_key:", "🔐"),
    (":building_construction:", "🏗️"),
    (":twisted_rightwards_arrows:", "🔀"),
    (":rewind:", "⏪"),
    (":fast_forward:", "⏩"),
    (":arrow_forward:", "▶️"),
    (":pause_button:", "⏸️"),
    (":stop_button:", "⏹️"),
    (":heavy_multiplication_x:", "✖️"),
    (":infinity:", "♾️"),
    (":pirate_flag:", "🏴‍☠️"),
    (":ambulance:", "🚑"),
    (":adhesive_bandage:", "🩹"),
    (":alembic:", "⚗️"),
    (":speaker:", "🔈"),
    (":mute:", "🔇"),
    (":children_crossing:", "🚸"),
    (":passport_control:", "🛂"),
    (":goal_net:", "🥅"),
    (":card_file_box:", "🗃️"),
    (":busts_in_silhouette:", "👥"),
    (":bust_in_silhouette:", "👤"),
    (":money_with_wings:", "💸"),
    (":globe:", "🌐"),
    (":coffin:", "⚰️"),
    (":bricks:", "🧱"),
    (":thread:", "🧵"),
    (":safety_vest:", "🦺"),
    (":monocle_face:", "🧐"),
    (":stethoscope:", "🩺"),
    (":compass:", "🧭"),
    // GitHub custom emoji
    (":atom:", "/static/emojis/atom.png"),
    (":basecamp:", "/static/emojis/basecamp.png"),
    (":basecampy:", "/static/emojis/basecampy.png"),
    (":bowtie:", "/static/emojis/bowtie.png"),
    (":dependabot:", "/static/emojis/dependabot.png"),
    (":electron:", "/static/emojis/electron.png"),
    (":feelsgood:", "/static/emojis/feelsgood.png"),
    (":finnadie:", "/static/emojis/finnadie.png"),
    (":fishsticks:", "/static/emojis/fishsticks.png"),
    (":goberserk:", "/static/emojis/goberserk.png"),
    (":godmode:", "/static/emojis/godmode.png"),
    (":hurtrealbad:", "/static/emojis/hurtrealbad.png"),
    (":neckbeard:", "/static/emojis/neckbeard.png"),
    (":octocat:", "/static/emojis/octocat.png"),
    (":rage1:", "/static/emojis/rage1.png"),
    (":rage2:", "/static/emojis/rage2.png"),
    (":rage3:", "/static/emojis/rage3.png"),
    (":rage4:", "/static/emojis/rage4.png"),
    (":shipit:", "/static/emojis/shipit.png"),
    (":squirrel:", "/static/emojis/shipit.png"),
    (":suspect:", "/static/emojis/suspect.png"),
    (":trollface:", "/static/emojis/trollface.png"),
];
