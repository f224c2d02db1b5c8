mod derived_field_rule_tests;
mod derived_field_stripper_tests;
