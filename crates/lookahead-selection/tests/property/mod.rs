mod selector_properties;
