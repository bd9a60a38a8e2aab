//! Onboarding tutorial content for the sift CLI

/// Get the onboarding tutorial content
pub fn get_onboarding_content() -> &'static str {
    r#"WELCOME TO SIFT

Sift evaluates predicates over data you hand it.

STEP 1: LITERALS
----------------
  sift check '1 == 1'
  => true

STEP 2: VARIABLES
-----------------
Fields of the input object become variables.

  sift check 'age >= 18' --input '{"age": 21}'
  => true

STEP 3: LOGIC
-------------
Combine conditions with and / or. The right side only runs when needed.

  sift check 'age >= 18 and country == "NZ"' --input '{"age": 21, "country": "NZ"}'
  => true

STEP 4: FUNCTIONS
-----------------
  sift check 'matches(email, "@example[.]com$")' --input '{"email": "a@example.com"}'
  => true

STEP 5: ARRAYS
--------------
  echo '{"tags": ["new", "sale"]}' | sift check 'tags == ["new", "sale"]'
  => true

NEXT STEPS
----------
  sift docs              List all documentation categories
  sift doc operators     Operators and precedence
  sift ast '<expr>'      Show how an expression parses
"#
}
