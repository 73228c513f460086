mod bound_properties;
