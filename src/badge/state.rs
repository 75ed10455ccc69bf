/// Badge contents as read from the profile form.
///
/// The state is rebuilt from the form controls once at load and patched
/// field-by-field as change events arrive. It has no identity of its own;
/// it only exists to be projected into the badge SVG.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BadgeState {
    /// Attendee name, printed large on the badge.
    pub name: String,
    /// Company name, printed under the attendee name.
    pub company: String,
    /// Preferred pronoun, shown on the extra-text line.
    pub pronoun: String,
    /// Twitter handle without the `@` prefix.
    pub twitter: String,
    /// Snake body colour variant, e.g. `blue`.
    pub snake_body: String,
    /// Snake accessory variant, e.g. `deerstalker`.
    pub snake_extras: String,
}

impl BadgeState {
    /// Builds the extra-text line from the pronoun and twitter handle.
    ///
    /// The two parts are joined by `" - "` only when both are present; a
    /// lone twitter handle gets its `@` prefix and nothing else.
    pub fn extra_text(&self) -> String {
        match (present(&self.pronoun), present(&self.twitter)) {
            (Some(pronoun), Some(twitter)) => format!("{pronoun} - @{twitter}"),
            (Some(pronoun), None) => pronoun.to_string(),
            (None, Some(twitter)) => format!("@{twitter}"),
            (None, None) => String::new(),
        }
    }
}

/// Filters out absent optional-field values.
///
/// The profile endpoint renders an unset field as the literal string "None",
/// so that sentinel has to be dropped along with the empty string.
fn present(value: &str) -> Option<&str> {
    if value.is_empty() || value == "None" {
        None
    } else {
        Some(value)
    }
}

/// The text fields watched by the badge preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Attendee name.
    Name,
    /// Company name.
    Company,
    /// Preferred pronoun.
    Pronoun,
    /// Twitter handle.
    Twitter,
}

impl Field {
    /// All watched text fields, in form order.
    pub const ALL: [Field; 4] = [Field::Name, Field::Company, Field::Pronoun, Field::Twitter];

    /// The ID of the form input backing this field.
    pub fn input_id(self) -> &'static str {
        match self {
            Field::Name => "id_name",
            Field::Company => "id_badge_company",
            Field::Pronoun => "id_badge_pronoun",
            Field::Twitter => "id_badge_twitter",
        }
    }

    /// Writes a new value for this field into the state.
    pub fn apply(self, state: &mut BadgeState, value: String) {
        match self {
            Field::Name => state.name = value,
            Field::Company => state.company = value,
            Field::Pronoun => state.pronoun = value,
            Field::Twitter => state.twitter = value,
        }
    }

    /// Reads this field's current value from the state.
    pub fn get(self, state: &BadgeState) -> &str {
        match self {
            Field::Name => &state.name,
            Field::Company => &state.company,
            Field::Pronoun => &state.pronoun,
            Field::Twitter => &state.twitter,
        }
    }
}

/// The attendee's role at the conference, as far as the badge cares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Role {
    /// Conference organiser.
    Organiser,
    /// Contributor (speaker, volunteer, etc.).
    Contributor,
    /// Regular attendee.
    #[default]
    Attendee,
}

impl Role {
    /// Collapses the two page-level flags into a role.
    ///
    /// Organiser takes precedence when both flags are set.
    pub fn from_flags(is_organiser: bool, is_contributor: bool) -> Self {
        if is_organiser {
            Role::Organiser
        } else if is_contributor {
            Role::Contributor
        } else {
            Role::Attendee
        }
    }

    /// The style class applied to the badge background, if any.
    ///
    /// Regular attendees keep whatever background the SVG ships with.
    pub fn background_class(self) -> Option<&'static str> {
        match self {
            Role::Organiser => Some("red"),
            Role::Contributor => Some("blue"),
            Role::Attendee => None,
        }
    }
}

/// Ticket rate categories sold by the ticketing system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketRate {
    /// Self-paid ticket.
    Individual,
    /// Employer-paid ticket.
    Corporate,
    /// Student or teacher ticket.
    Education,
    /// Complimentary ticket.
    Free,
    /// A rate this crate does not know about.
    Other(String),
}

impl TicketRate {
    /// Parses a rate identifier as rendered into the page.
    pub fn parse(rate: &str) -> Self {
        match rate {
            "individual" => TicketRate::Individual,
            "corporate" => TicketRate::Corporate,
            "education" => TicketRate::Education,
            "free" => TicketRate::Free,
            other => TicketRate::Other(other.to_string()),
        }
    }

    /// Whether the company field is locked to the order's company name.
    ///
    /// Corporate attendees cannot edit their company; it comes from the
    /// order that paid for the ticket.
    pub fn locks_company(&self) -> bool {
        matches!(self, TicketRate::Corporate)
    }
}

/// Name size classes tried in order when fitting the name into its box.
pub const NAME_FIT_TIERS: [&str; 3] = ["large-name", "small-name", "name-extras"];

/// Widest a rendered name may be before the next tier is tried, in SVG
/// user units.
pub const NAME_WIDTH_LIMIT: f32 = 95.0;

/// Picks the size class for the name text node.
///
/// `measure` must apply the given class to the node and report the
/// resulting rendered length. Tiers are tried in [`NAME_FIT_TIERS`] order;
/// the final tier is applied unconditionally, so a name that overflows even
/// the smallest size is left overflowing rather than truncated.
pub fn fit_name_class<F>(mut measure: F) -> &'static str
where
    F: FnMut(&'static str) -> f32,
{
    let last_index = NAME_FIT_TIERS.len() - 1;
    for &class in &NAME_FIT_TIERS[..last_index] {
        if measure(class) <= NAME_WIDTH_LIMIT {
            return class;
        }
    }
    let last = NAME_FIT_TIERS[last_index];
    measure(last);
    last
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(pronoun: &str, twitter: &str) -> BadgeState {
        BadgeState {
            pronoun: pronoun.to_string(),
            twitter: twitter.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn extra_text_empty_when_both_absent() {
        for pronoun in ["", "None"] {
            for twitter in ["", "None"] {
                assert_eq!(state_with(pronoun, twitter).extra_text(), "");
            }
        }
    }

    #[test]
    fn extra_text_pronoun_only() {
        for twitter in ["", "None"] {
            assert_eq!(state_with("they/them", twitter).extra_text(), "they/them");
        }
    }

    #[test]
    fn extra_text_twitter_only() {
        for pronoun in ["", "None"] {
            assert_eq!(state_with(pronoun, "pyconuk").extra_text(), "@pyconuk");
        }
    }

    #[test]
    fn extra_text_both_present() {
        assert_eq!(
            state_with("she/her", "pyconuk").extra_text(),
            "she/her - @pyconuk"
        );
    }

    #[test]
    fn field_apply_and_get_round_trip() {
        let mut state = BadgeState::default();
        for field in Field::ALL {
            field.apply(&mut state, field.input_id().to_string());
            assert_eq!(field.get(&state), field.input_id());
        }
    }

    #[test]
    fn role_from_flags() {
        assert_eq!(Role::from_flags(true, false), Role::Organiser);
        assert_eq!(Role::from_flags(false, true), Role::Contributor);
        assert_eq!(Role::from_flags(false, false), Role::Attendee);
        // Organiser wins when the page sets both flags.
        assert_eq!(Role::from_flags(true, true), Role::Organiser);
    }

    #[test]
    fn background_class_per_role() {
        assert_eq!(Role::Organiser.background_class(), Some("red"));
        assert_eq!(Role::Contributor.background_class(), Some("blue"));
        assert_eq!(Role::Attendee.background_class(), None);
    }

    #[test]
    fn ticket_rate_parsing() {
        assert_eq!(TicketRate::parse("corporate"), TicketRate::Corporate);
        assert_eq!(TicketRate::parse("individual"), TicketRate::Individual);
        assert_eq!(
            TicketRate::parse("sponsor"),
            TicketRate::Other("sponsor".to_string())
        );
    }

    #[test]
    fn only_corporate_locks_company() {
        assert!(TicketRate::Corporate.locks_company());
        assert!(!TicketRate::Individual.locks_company());
        assert!(!TicketRate::Education.locks_company());
        assert!(!TicketRate::Free.locks_company());
        assert!(!TicketRate::Other("sponsor".to_string()).locks_company());
    }

    #[test]
    fn name_fits_in_large() {
        let mut applied = Vec::new();
        let class = fit_name_class(|class| {
            applied.push(class);
            40.0
        });
        assert_eq!(class, "large-name");
        assert_eq!(applied, ["large-name"]);
    }

    #[test]
    fn name_downgrades_to_small() {
        let class = fit_name_class(|class| if class == "large-name" { 120.0 } else { 80.0 });
        assert_eq!(class, "small-name");
    }

    #[test]
    fn name_falls_back_to_final_tier() {
        let mut applied = Vec::new();
        let class = fit_name_class(|class| {
            applied.push(class);
            200.0
        });
        assert_eq!(class, "name-extras");
        // The final tier is applied even though it still overflows.
        assert_eq!(applied, ["large-name", "small-name", "name-extras"]);
    }

    #[test]
    fn name_exactly_at_limit_keeps_large() {
        assert_eq!(fit_name_class(|_| NAME_WIDTH_LIMIT), "large-name");
    }
}
