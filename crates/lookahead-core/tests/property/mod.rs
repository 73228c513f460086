mod observation_properties;
